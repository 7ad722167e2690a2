use crate::demo::{run_demo, run_search, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use flatfly::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FlatFly",
    about = "Run and demonstrate the FlatFly relocation assistant from the command line",
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
    /// Filter and rank the listing catalog from the terminal
    Search(SearchArgs),
    /// Run an end-to-end terminal demo: search, outreach, checklist
    Demo(DemoArgs),
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
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
