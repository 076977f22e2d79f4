//! `domgen init`: create a default configuration file.

use std::path::{Path, PathBuf};

use domgen_adapters::builtin_templates;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default domgen configuration file, and optionally a copy of the
/// bundled templates.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    _config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = if args.local {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    } else {
        write_default_config(&config_path)?;
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    }

    if args.with_templates {
        let dir = Path::new("templates");
        let written = builtin_templates::export(dir, args.force)
            .with_cli_context(|| format!("Failed to write templates to '{}'", dir.display()))?;

        if written.is_empty() {
            output.warning("Templates already present in ./templates (use --force to overwrite)")?;
        } else {
            output.success(&format!(
                "{} template(s) written to {}",
                written.len(),
                dir.display()
            ))?;
        }
    }

    Ok(())
}

fn write_default_config(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn written_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/config.toml");

        write_default_config(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.generation.marker, "src/main/java");
    }
}
