use failure::Fail;
use juniper_aws_appsync_notes::{Config, DynamoStore, NoteResolver};
use tracing_subscriber::EnvFilter;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env().map_err(Fail::compat)?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoStore::new(aws_sdk_dynamodb::Client::new(&aws_config), &config);
    tracing::info!(table = %store.table_name(), "notes resolver starting");

    lambda_runtime::run(NoteResolver::new(store)).await?;
    Ok(())
}
