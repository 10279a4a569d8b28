use crate::demo::{run_demo, run_kpi_report, run_rent_roll_report, DemoArgs, KpiArgs, RentRollArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rentledger::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rentledger",
    about = "Run the rental portfolio ledger and its reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Generate a report over the sample portfolio
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
    /// Run an end-to-end CLI demo over a seeded portfolio
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Print the day-by-day rent roll for a date range
    RentRoll(RentRollArgs),
    /// Print monthly occupancy and move KPIs for a date range
    Kpi(KpiArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Preload the in-memory store with the sample portfolio
    #[arg(long)]
    pub(crate) seed: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report {
            command: ReportCommand::RentRoll(args),
        } => run_rent_roll_report(args),
        Command::Report {
            command: ReportCommand::Kpi(args),
        } => run_kpi_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
