use anyhow::{ensure, Result};
use aws_sdk_dynamodb::model::AttributeValue;
use serde::Deserialize;
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

/// Incoming invocation payload. Missing keys decode as empty strings.
#[derive(Deserialize, PartialEq, Eq, Clone, Default, Debug)]
#[serde(default)]
pub struct Event {
    pub id: String,
    #[serde(rename = "obj_name")]
    pub object_name: String,
    pub body: String,
}

impl Event {
    /// Maps each field to a string attribute named after its wire key.
    pub fn to_item(&self) -> Result<Item> {
        // DynamoDB refuses empty strings for key attributes
        ensure!(!self.id.is_empty(), "event id must not be empty");

        Ok(HashMap::from([
            ("id".to_string(), AttributeValue::S(self.id.clone())),
            ("obj_name".to_string(), AttributeValue::S(self.object_name.clone())),
            ("body".to_string(), AttributeValue::S(self.body.clone())),
        ]))
    }
}
