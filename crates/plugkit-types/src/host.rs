use crate::CommandEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The host's shared configuration object, as seen by the config hook
///
/// Only the `command` map is typed; every other host field is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<BTreeMap<String, CommandEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered command by name
    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.command.as_ref().and_then(|commands| commands.get(name))
    }
}
