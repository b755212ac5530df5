// Webhook payload: one database change event as delivered by an event trigger.
//
// Purpose
// - Carry a delivery from the inbound adapter into the store and back out unchanged.
//
// Decoding
// - `id` is required; every other field falls back to its empty value when absent or `null`.
// - `old` and `new` stay opaque JSON. Nothing in this crate interprets them.
//
// Encoding
// - Every field is always written, so a stored record reads back as the object that was sent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event: ChangeEvent,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trigger: Trigger,
    #[serde(default, deserialize_with = "null_as_default")]
    pub table: SourceTable,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChangeEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_variables: HashMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub op: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ChangeData,
}

/// Row state before and after the change. Either side may be `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangeData {
    pub old: Value,
    pub new: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trigger {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceTable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub schema: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

// Event triggers send `null` for fields they have no value for, e.g. `session_variables`
// on changes made outside the API.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EventRecord {
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn operation(&self) -> &str {
        &self.event.op
    }

    pub fn session_context(&self) -> &HashMap<String, String> {
        &self.event.session_variables
    }

    pub fn before(&self) -> &Value {
        &self.event.data.old
    }

    pub fn after(&self) -> &Value {
        &self.event.data.new
    }

    pub fn source_table(&self) -> &SourceTable {
        &self.table
    }

    pub fn trigger_name(&self) -> &str {
        &self.trigger.name
    }
}
