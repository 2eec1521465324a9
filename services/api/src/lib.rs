mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use kleaners_pricing::error::AppError;

pub use routes::pricing_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
