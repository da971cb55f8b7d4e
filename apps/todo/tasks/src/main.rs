#[tokio::main]
async fn main() -> eyre::Result<()> {
    todo_tasks::run().await
}
