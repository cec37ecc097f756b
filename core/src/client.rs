use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;

use crate::config::StoreConfig;
use crate::credentials::CredentialProvider;
use crate::error::Result;
use crate::repository::DynamoTaskRepository;

/// Builds the one table client a process uses, bound to the configured table.
///
/// With parameter names configured, the access key pair is read from the
/// parameter store (through the default credential chain) and injected as
/// static credentials. Otherwise the default chain is used directly.
pub async fn connect(config: &StoreConfig) -> Result<DynamoTaskRepository> {
    let region = Region::new(config.region.clone());
    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region.clone());

    if let Some(names) = &config.credentials {
        let base = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        let provider = CredentialProvider::new(aws_sdk_ssm::Client::new(&base), names.clone());
        loader = loader.credentials_provider(provider.fetch().await?);
    }

    let sdk_config = loader.load().await;
    log::info!("using table {} in {}", config.table_name, config.region);
    Ok(DynamoTaskRepository::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.table_name.clone(),
    ))
}
