#[tokio::main]
async fn main() -> eyre::Result<()> {
    todo_gateway::run().await
}
