//! Config command - View and validate adclink configuration
//!
//! Provides the `adclink config` CLI command which:
//! 1. Shows the effective configuration (YAML or JSON)
//! 2. Validates the configuration file and reports errors
//! 3. Prints where the configuration file is read from

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use adclink_core::config::Config;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Print the configuration file path
    Path,
}

impl ConfigCommand {
    pub fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        match self {
            ConfigCommand::Show => execute_show(ctx, format),
            ConfigCommand::Validate => execute_validate(ctx, format),
            ConfigCommand::Path => execute_path(ctx, format),
        }
    }
}

fn execute_show(ctx: &CliContext, format: OutputFormat) -> Result<bool> {
    let formatter = get_formatter(format);
    info!(config_path = %ctx.config_path.display(), "Showing configuration");

    if format.is_json() {
        let json = serde_json::to_value(&ctx.config)
            .context("Failed to serialize configuration to JSON")?;
        formatter.print_json(&json);
        return Ok(true);
    }

    let origin = if ctx.config_path.exists() {
        ctx.config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    formatter.success(&format!("Configuration ({origin})"));
    formatter.info("");

    let yaml =
        serde_yaml::to_string(&ctx.config).context("Failed to serialize configuration to YAML")?;
    for line in yaml.lines() {
        formatter.info(line);
    }
    Ok(true)
}

fn execute_validate(ctx: &CliContext, format: OutputFormat) -> Result<bool> {
    let formatter = get_formatter(format);
    let path = &ctx.config_path;

    // The context already fell back to defaults; reload to surface parse errors
    let config = if ctx.explicit || !path.exists() {
        ctx.config.clone()
    } else {
        match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                let message = format!("Failed to parse configuration: {e}");
                if format.is_json() {
                    formatter.print_json(&serde_json::json!({
                        "valid": false,
                        "config_path": path.display().to_string(),
                        "errors": [message],
                    }));
                } else {
                    formatter.error(&message);
                    formatter.info(&format!("File: {}", path.display()));
                }
                return Ok(true);
            }
        }
    };

    info!(config_path = %path.display(), "Validating configuration");
    let errors = config.validate();

    if format.is_json() {
        let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        formatter.print_json(&serde_json::json!({
            "valid": errors.is_empty(),
            "config_path": path.display().to_string(),
            "errors": error_strings,
        }));
    } else if errors.is_empty() {
        formatter.success("Configuration is valid");
        if path.exists() {
            formatter.info(&format!("File: {}", path.display()));
        } else {
            formatter.info("No configuration file; built-in defaults are in use");
        }
    } else {
        formatter.error(&format!(
            "Configuration has {} error{}:",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        ));
        formatter.info(&format!("File: {}", path.display()));
        formatter.info("");
        for error in &errors {
            formatter.info(&format!("  {} - {}", error.field, error.message));
        }
    }

    Ok(true)
}

fn execute_path(ctx: &CliContext, format: OutputFormat) -> Result<bool> {
    if format.is_json() {
        get_formatter(format).print_json(&serde_json::json!({
            "config_path": ctx.config_path.display().to_string(),
            "exists": ctx.config_path.exists(),
        }));
    } else {
        println!("{}", ctx.config_path.display());
    }
    Ok(true)
}
