//! Config hook that injects loaded commands into the host configuration

use async_trait::async_trait;
use plugkit_types::{Command, CommandEntry, HostConfig};
use std::sync::Arc;
use tracing::info;

/// Callback the host runs while assembling its configuration
#[async_trait]
pub trait ConfigHook: Send + Sync {
    /// Mutate the shared configuration in place
    async fn config(&self, config: &mut HostConfig);
}

/// Registers every loaded command in the host's `command` map
pub struct CommandConfigHook {
    commands: Arc<[Command]>,
}

impl CommandConfigHook {
    /// Create a hook over an already-loaded command set
    #[must_use]
    pub fn new(commands: Arc<[Command]>) -> Self {
        Self { commands }
    }

    /// Insert one entry per command, keyed by name. Later commands with the
    /// same name overwrite earlier ones; unrelated entries are left alone.
    pub fn register_commands(&self, config: &mut HostConfig) {
        let map = config.command.get_or_insert_with(Default::default);

        for cmd in self.commands.iter() {
            map.insert(cmd.name.clone(), CommandEntry::from(cmd));
        }

        info!(count = self.commands.len(), "Registered commands in host config");
    }
}

#[async_trait]
impl ConfigHook for CommandConfigHook {
    async fn config(&self, config: &mut HostConfig) {
        self.register_commands(config);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use plugkit_types::CommandFrontmatter;
    use std::path::PathBuf;

    fn command(name: &str, template: &str, frontmatter: CommandFrontmatter) -> Command {
        Command {
            name: name.into(),
            frontmatter,
            template: template.into(),
            source_path: PathBuf::from(format!("{name}.md")),
        }
    }

    #[tokio::test]
    async fn test_creates_command_map_when_absent() {
        let hook = CommandConfigHook::new(
            vec![command(
                "hello",
                "Say hello to {name}",
                CommandFrontmatter {
                    description: Some("Say hello".into()),
                    ..Default::default()
                },
            )]
            .into(),
        );

        let mut config = HostConfig::new();
        hook.config(&mut config).await;

        let entry = config.command("hello").unwrap();
        assert_eq!(entry.template, "Say hello to {name}");
        assert_eq!(entry.description.as_deref(), Some("Say hello"));
        assert_eq!(entry.agent, None);
        assert_eq!(entry.model, None);
        assert_eq!(entry.subtask, None);
    }

    #[tokio::test]
    async fn test_copies_every_field() {
        let fm = CommandFrontmatter {
            description: Some("d".into()),
            agent: Some("build".into()),
            model: Some("m".into()),
            subtask: Some(true),
        };
        let hook = CommandConfigHook::new(vec![command("full", "t", fm)].into());

        let mut config = HostConfig::new();
        hook.config(&mut config).await;

        assert_eq!(
            config.command("full"),
            Some(&CommandEntry {
                template: "t".into(),
                description: Some("d".into()),
                agent: Some("build".into()),
                model: Some("m".into()),
                subtask: Some(true),
            })
        );
    }

    #[tokio::test]
    async fn test_keeps_existing_entries_and_host_fields() {
        let mut config: HostConfig = serde_json::from_value(serde_json::json!({
            "theme": "dark",
            "command": { "existing": { "template": "keep me" } }
        }))
        .unwrap();

        let hook = CommandConfigHook::new(
            vec![command("new", "added", CommandFrontmatter::default())].into(),
        );
        hook.config(&mut config).await;

        assert_eq!(config.command("existing").unwrap().template, "keep me");
        assert_eq!(config.command("new").unwrap().template, "added");
        assert_eq!(config.extra["theme"], "dark");
    }

    #[tokio::test]
    async fn test_later_command_wins_on_collision() {
        let hook = CommandConfigHook::new(
            vec![
                command("git-commit", "first", CommandFrontmatter::default()),
                command("git-commit", "second", CommandFrontmatter::default()),
            ]
            .into(),
        );

        let mut config: HostConfig = serde_json::from_value(serde_json::json!({
            "command": { "git-commit": { "template": "host default" } }
        }))
        .unwrap();
        hook.config(&mut config).await;

        assert_eq!(config.command.as_ref().unwrap().len(), 1);
        assert_eq!(config.command("git-commit").unwrap().template, "second");
    }

    #[tokio::test]
    async fn test_no_commands_still_creates_empty_map() {
        let hook = CommandConfigHook::new(Vec::<Command>::new().into());
        let mut config = HostConfig::new();
        hook.config(&mut config).await;

        assert_eq!(config.command, Some(Default::default()));
    }
}
