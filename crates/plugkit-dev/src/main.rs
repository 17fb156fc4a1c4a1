use anyhow::{Context, Result};
use clap::Parser;
use plugkit_plugin::{ExamplePlugin, PluginOptions};
use plugkit_types::HostConfig;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Drive the example plugin the way a host would and print what it registers
#[derive(Parser, Debug)]
#[command(name = "plugkit-dev", version)]
struct Cli {
    /// Override the command directory from plugkit.toml / PLUGKIT__COMMAND_DIR
    #[arg(long)]
    command_dir: Option<PathBuf>,

    /// Host configuration (JSON file) to run the config hook against
    #[arg(long)]
    host_config: Option<PathBuf>,

    /// Invoke a registered tool after initialization
    #[arg(long)]
    tool: Option<String>,

    /// JSON arguments passed to --tool
    #[arg(long, default_value = "{}")]
    args: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut options = PluginOptions::load()?;
    if let Some(dir) = cli.command_dir {
        options.command_dir = dir;
    }

    if cli.json_logs {
        plugkit_logging::init_logging_json(&options.log_level)?;
    } else {
        plugkit_logging::init_logging(&options.log_level)?;
    }

    let hooks = ExamplePlugin::init(&options).await?;

    let mut config = match &cli.host_config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<HostConfig>(&raw)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => HostConfig::new(),
    };
    hooks.apply_config(&mut config).await;

    let mut output = serde_json::json!({
        "tools": hooks.tools.definitions(),
        "config": config,
    });

    if let Some(tool) = cli.tool {
        let args: Value = serde_json::from_str(&cli.args).context("--args is not valid JSON")?;
        info!(tool = %tool, "Invoking tool");
        let result = hooks.tools.execute(&tool, args).await?;
        output["tool_result"] = Value::String(result);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
