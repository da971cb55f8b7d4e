#[tokio::main]
async fn main() -> eyre::Result<()> {
    todo_users::run().await
}
