//! Static credentials sourced from the SSM parameter store.

use aws_credential_types::Credentials;
use aws_sdk_ssm::Client;

use crate::config::ParameterNames;
use crate::error::{Error, Result};

const PROVIDER_NAME: &str = "TaskTrackerParameterStore";

pub struct CredentialProvider {
    client: Client,
    names: ParameterNames,
}

impl CredentialProvider {
    pub fn new(client: Client, names: ParameterNames) -> Self {
        Self { client, names }
    }

    /// Reads both parameters afresh and builds a static credential pair.
    pub async fn fetch(&self) -> Result<Credentials> {
        let access_key_id = self.parameter(&self.names.access_key_id).await?;
        let secret_access_key = self.parameter(&self.names.secret_access_key).await?;
        Ok(Credentials::new(
            access_key_id,
            secret_access_key,
            None,
            None,
            PROVIDER_NAME,
        ))
    }

    async fn parameter(&self, name: &str) -> Result<String> {
        log::debug!("fetching parameter {name}");
        let output = match self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
        {
            Ok(output) => output,
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_parameter_not_found()) =>
            {
                return Err(Error::MissingParameter(name.to_string()));
            }
            Err(err) => return Err(Error::ParameterStore(err.into())),
        };

        output
            .parameter()
            .and_then(|p| p.value())
            .map(str::to_string)
            .ok_or_else(|| Error::MissingParameter(name.to_string()))
    }
}
