//! Command file discovery and loading
//!
//! One pass: enumerate `*.md` under the root, read each file, parse its
//! frontmatter, derive the name, collect. Nothing is cached; a reload means
//! calling [`load_commands`] again.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use plugkit_types::Command;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{CommandError, Result};
use crate::frontmatter::parse_frontmatter;

const COMMAND_EXTENSION: &str = ".md";

/// Load every command under `root`.
///
/// Files are processed in sorted path order, so when two files map to the
/// same name the later one in that order is the one a name-keyed consumer
/// ends up with. Both are returned here.
///
/// A missing root yields no commands. Any failure to list a directory or
/// read a file aborts the whole load.
///
/// # Errors
/// Returns [`CommandError`] if the root is not a directory or any I/O
/// operation under it fails.
pub async fn load_commands(root: &Path) -> Result<Vec<Command>> {
    match fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(CommandError::NotADirectory {
                path: root.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(root = %root.display(), "Command directory does not exist, no commands loaded");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(CommandError::Scan {
                path: root.to_path_buf(),
                source,
            })
        }
    }

    let files = discover_command_files(root).await?;
    let mut commands = Vec::with_capacity(files.len());
    let mut seen = HashSet::new();

    for path in files {
        let name = command_name(root, &path)?;
        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| CommandError::Read {
                path: path.clone(),
                source,
            })?;

        let (frontmatter, template) = parse_frontmatter(&content);
        if template.is_empty() {
            warn!(command = %name, path = %path.display(), "Command has an empty template");
        }

        if !seen.insert(name.clone()) {
            debug!(command = %name, path = %path.display(), "Command shadows an earlier file with the same name");
        }

        debug!(command = %name, path = %path.display(), "Loaded command");
        commands.push(Command {
            name,
            frontmatter,
            template,
            source_path: path,
        });
    }

    info!(root = %root.display(), count = commands.len(), "Loaded commands");
    Ok(commands)
}

/// Derive a command name from a file path under `root`.
///
/// Path components are joined with `-` and a trailing `.md` is removed:
/// `git/commit.md` becomes `git-commit`.
///
/// # Errors
/// Returns [`CommandError::OutsideRoot`] if `path` is not under `root`.
pub fn command_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| CommandError::OutsideRoot {
            root: root.to_path_buf(),
            path: path.to_path_buf(),
        })?;

    let mut name = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("-");

    if name.ends_with(COMMAND_EXTENSION) {
        name.truncate(name.len() - COMMAND_EXTENSION.len());
    }

    Ok(name)
}

/// Walk `root` and return every command file, sorted by path.
///
/// Hidden entries are skipped and symlinks are not followed.
async fn discover_command_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = fs::read_dir(&dir).await.map_err(|source| CommandError::Scan {
            path: dir.clone(),
            source,
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| CommandError::Scan {
                path: dir.clone(),
                source,
            })?
        {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if file_name.starts_with('.') {
                continue;
            }

            let file_type = entry.file_type().await.map_err(|source| CommandError::Scan {
                path: entry.path(),
                source,
            })?;

            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() && is_command_file(&file_name) {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    Ok(files)
}

fn is_command_file(file_name: &str) -> bool {
    file_name.len() > COMMAND_EXTENSION.len() && file_name.ends_with(COMMAND_EXTENSION)
}
