//! Plugin entry point

use anyhow::{Context, Result};
use plugkit_commands::load_commands;
use plugkit_types::{Command, HostConfig};
use std::sync::Arc;
use tracing::info;

use crate::config::PluginOptions;
use crate::hook::{CommandConfigHook, ConfigHook};
use crate::tool::{EchoTool, ToolRegistry};

/// What the plugin hands back to the host after initialization
pub struct PluginHooks {
    /// Tools callable by the model
    pub tools: ToolRegistry,
    /// Hook run while the host assembles its configuration
    pub config: Option<Arc<dyn ConfigHook>>,
    commands: Arc<[Command]>,
}

impl PluginHooks {
    /// Commands loaded at initialization, in load order
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Run the config hook, if any, against `config`
    pub async fn apply_config(&self, config: &mut HostConfig) {
        if let Some(hook) = &self.config {
            hook.config(config).await;
        }
    }
}

/// The example plugin
pub struct ExamplePlugin;

impl ExamplePlugin {
    /// Initialize the plugin. Commands are loaded here, once, before the
    /// hooks are returned; they are not reloaded afterwards.
    ///
    /// # Errors
    /// Fails if the command directory cannot be read.
    pub async fn init(options: &PluginOptions) -> Result<PluginHooks> {
        info!(command_dir = %options.command_dir.display(), "Initializing example plugin");

        let commands: Arc<[Command]> = load_commands(&options.command_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to load commands from {}",
                    options.command_dir.display()
                )
            })?
            .into();

        let mut tools = ToolRegistry::new();
        tools.register(EchoTool);

        let hook: Arc<dyn ConfigHook> = Arc::new(CommandConfigHook::new(Arc::clone(&commands)));

        info!(
            commands = commands.len(),
            tools = tools.len(),
            "Example plugin ready"
        );

        Ok(PluginHooks {
            tools,
            config: Some(hook),
            commands,
        })
    }
}
