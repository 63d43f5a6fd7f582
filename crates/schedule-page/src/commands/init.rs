//! Write a default config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing schedule-page...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'schedule-page build' to generate the page.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# schedule-page configuration

[inputs]
# K-State schedule export
kstate = "kstate.csv"

# State general schedule export
state = "state.csv"

# Regents schedule export
regents = "regents.csv"

[output]
# Generated page, overwritten on every build
path = "schedules.html"

# Wrap the page in a complete HTML document
standalone = false

# Document title (standalone only)
title = "Official Document Schedules"

# Collapse the style rules onto one line
minify_css = false
"#;
