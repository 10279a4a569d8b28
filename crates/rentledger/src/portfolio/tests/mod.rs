mod common;
mod rent_roll;
