#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dockflow_lib::main().await
}
