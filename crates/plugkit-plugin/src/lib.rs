//! plugkit Example Plugin
//!
//! A template plugin for an LLM-agent host. It demonstrates the three
//! extension points the host exposes:
//!
//! - a callable tool (`example_tool`, echoes its `message` argument)
//! - slash commands loaded from the markdown files under `command/`
//! - a config hook that injects those commands into the host's `command` map
//!
//! The host drives everything: it calls [`ExamplePlugin::init`] once, keeps
//! the returned [`PluginHooks`], and later hands its configuration to the
//! config hook.
//!
//! ```rust,ignore
//! let options = PluginOptions::load()?;
//! let hooks = ExamplePlugin::init(&options).await?;
//!
//! let mut config = HostConfig::new();
//! hooks.apply_config(&mut config).await;
//!
//! let reply = hooks.tools.execute("example_tool", json!({"message": "hi"})).await?;
//! assert_eq!(reply, "Echo: hi");
//! ```

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod config;
pub mod hook;
pub mod plugin;
pub mod tool;

pub use config::PluginOptions;
pub use hook::{CommandConfigHook, ConfigHook};
pub use plugin::{ExamplePlugin, PluginHooks};
pub use tool::{EchoTool, ToolFunction, ToolRegistry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ConfigHook, ExamplePlugin, PluginHooks, PluginOptions, ToolFunction};
    pub use plugkit_types::{Command, CommandEntry, HostConfig};
}
