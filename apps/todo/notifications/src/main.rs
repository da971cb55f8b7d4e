#[tokio::main]
async fn main() -> eyre::Result<()> {
    todo_notifications::run().await
}
