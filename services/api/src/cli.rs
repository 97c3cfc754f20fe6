use crate::demo::{run_demo, run_scan, DemoArgs, ScanArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deal_scout::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Deal Scout",
    about = "Scan listing exports and flag profitable real-estate deals from the command line",
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
    /// Work with listing exports
    Deals {
        #[command(subcommand)]
        command: DealsCommand,
    },
    /// Run a CLI demo over a bundled set of sample listings
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DealsCommand {
    /// Analyze a listing export and print a verdict per listing
    Scan(ScanArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Deals {
            command: DealsCommand::Scan(args),
        } => run_scan(args),
        Command::Demo(args) => run_demo(args),
    }
}
