#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tahrir_server::start().await
}
