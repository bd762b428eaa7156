use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    claude_history::cli::run().await
}
