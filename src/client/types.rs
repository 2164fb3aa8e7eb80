//! Public types returned by the Mattermost API client.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Mattermost team, kept exactly as the server sent it.
///
/// The server schema is not validated; fields keep their original order
/// and any new fields the server adds pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(Map<String, Value>);

impl Team {
    /// Server-assigned team ID.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// URL slug of the team.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn display_name(&self) -> Option<&str> {
        self.str_field("display_name")
    }

    /// Raw access to any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
