use crate::commands::{run_quote, run_recommend, run_tiers, QuoteArgs, RecommendArgs, TiersArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use kleaners_pricing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kleaners Pricing",
    about = "Quote cleaning services and serve the booking pricing API",
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
    /// Compute a full estimate with add-ons, discounts, and tax
    Quote(QuoteArgs),
    /// Print the size-tier price table, or the tier for one property size
    Tiers(TiersArgs),
    /// Recommend a cleaning frequency for a commercial site
    Recommend(RecommendArgs),
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
        Command::Quote(args) => run_quote(args),
        Command::Tiers(args) => run_tiers(args),
        Command::Recommend(args) => run_recommend(args),
    }
}
