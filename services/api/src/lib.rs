mod cli;
mod infra;
mod report;
mod routes;
mod server;

use relief_finder::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
