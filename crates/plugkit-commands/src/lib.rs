//! plugkit Commands
//!
//! Loads slash commands from a directory of markdown files.
//!
//! ## File format
//!
//! ```markdown
//! ---
//! description: Say hello
//! agent: build
//! model: anthropic/claude-sonnet
//! subtask: true
//! ---
//! Say hello to {name}
//! ```
//!
//! The frontmatter block is optional and flat: one `key: value` per line,
//! split at the first colon. Only `description`, `agent`, `model` and
//! `subtask` are recognised; anything else is ignored. The command name is
//! the file's path relative to the command root with `.md` removed and path
//! separators replaced by `-`, so `git/commit.md` becomes `git-commit`.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod error;
pub mod frontmatter;
pub mod loader;

pub use error::CommandError;
pub use frontmatter::parse_frontmatter;
pub use loader::{command_name, load_commands};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{load_commands, parse_frontmatter, CommandError};
    pub use plugkit_types::{Command, CommandFrontmatter};
}
