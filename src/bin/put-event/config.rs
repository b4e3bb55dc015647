use aws_config::retry::RetryConfig;
use aws_sdk_dynamodb::Client;
use std::env;

const TABLE_NAME: &str = "DYNAMO_TABLE_NAME";
const ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT";

#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Config {
    pub table_name: String,
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    /// An unset table name is kept empty; the put fails on it later.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            match key.as_str() {
                TABLE_NAME => config.table_name = value,
                ENDPOINT_URL if !value.is_empty() => config.endpoint_url = Some(value),
                _ => {}
            }
        }
        config
    }

    /// Region and credentials come from the default provider chain.
    pub async fn client(&self) -> Client {
        let shared = aws_config::from_env()
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
        if let Some(url) = &self.endpoint_url {
            builder = builder.endpoint_url(url);
        }

        Client::from_conf(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_vars() {
        let config = Config::from_vars(vars(&[
            ("DYNAMO_TABLE_NAME", "events"),
            ("DYNAMODB_ENDPOINT", "http://localhost:8000"),
            ("AWS_REGION", "eu-west-1"),
        ]));

        assert_eq!(
            config,
            Config {
                table_name: "events".to_string(),
                endpoint_url: Some("http://localhost:8000".to_string()),
            }
        );
    }

    #[test]
    fn test_from_vars_unset() {
        let config = Config::from_vars(vars(&[("HOME", "/root"), ("DYNAMODB_ENDPOINT", "")]));

        assert_eq!(config, Config::default());
        assert!(config.table_name.is_empty());
    }
}
