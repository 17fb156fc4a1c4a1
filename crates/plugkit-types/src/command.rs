use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Recognised frontmatter fields of a command file
///
/// Fields are `None` when the key was absent from the block. `subtask` is
/// `Some(false)` when the key was present with any value other than `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandFrontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<bool>,
}

impl CommandFrontmatter {
    /// True when no recognised key was set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A slash command loaded from a markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Name derived from the path relative to the command root (`git/commit.md` -> `git-commit`)
    pub name: String,
    pub frontmatter: CommandFrontmatter,
    /// Trimmed document body; empty when the file holds only frontmatter
    pub template: String,
    /// File the command was read from
    pub source_path: PathBuf,
}

/// Entry in the host's `command` map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<bool>,
}

impl From<&Command> for CommandEntry {
    fn from(cmd: &Command) -> Self {
        Self {
            template: cmd.template.clone(),
            description: cmd.frontmatter.description.clone(),
            agent: cmd.frontmatter.agent.clone(),
            model: cmd.frontmatter.model.clone(),
            subtask: cmd.frontmatter.subtask,
        }
    }
}
