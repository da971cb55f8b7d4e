#[tokio::main]
async fn main() -> eyre::Result<()> {
    todo_analytics::run().await
}
