use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client;
use derive_builder::Builder;
use tracing::info;

use crate::event::Event;

#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
pub struct Store {
    table_name: String,
    client: Client,
}

impl Store {
    /// Writes the event as one unconditional put, overwriting any item with the same id.
    pub async fn put_event(&self, event: &Event) -> Result<()> {
        let item = event.to_item().context("Got error marshalling map")?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .context("Got error calling PutItem")?;

        info!("saved to Dynamo {}", event.id);

        Ok(())
    }
}

#[cfg(test)]
pub fn mock_client(endpoint_url: &str) -> Client {
    use aws_config::retry::RetryConfig;
    use aws_sdk_dynamodb::{Credentials, Region};

    let config = aws_sdk_dynamodb::Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new("AKID", "SECRET", None, None, "test"))
        .retry_config(RetryConfig::disabled())
        .endpoint_url(endpoint_url)
        .build();

    Client::from_conf(config)
}
