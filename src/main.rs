/*
 * Responsibility
 * - tokio runtime の起動
 * - app::run() への委譲 (ここにはロジックを置かない)
 */
use anyhow::Result;

mod api;
mod app;
mod config;
mod error;
mod middleware;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
