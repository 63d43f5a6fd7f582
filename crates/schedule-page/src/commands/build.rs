//! Schedule page build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use schedule_static::{ConversionStatus, DocumentGenerator, GenerateConfig};
use serde::Deserialize;

/// Configuration file structure (schedules.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    inputs: InputsConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
struct InputsConfig {
    #[serde(default = "default_kstate")]
    kstate: PathBuf,
    #[serde(default = "default_state")]
    state: PathBuf,
    #[serde(default = "default_regents")]
    regents: PathBuf,
}

#[derive(Debug, Deserialize)]
struct OutputConfig {
    #[serde(default = "default_output")]
    path: PathBuf,
    #[serde(default)]
    standalone: bool,
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    minify_css: bool,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            kstate: default_kstate(),
            state: default_state(),
            regents: default_regents(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output(),
            standalone: false,
            title: default_title(),
            minify_css: false,
        }
    }
}

fn default_kstate() -> PathBuf {
    PathBuf::from("kstate.csv")
}
fn default_state() -> PathBuf {
    PathBuf::from("state.csv")
}
fn default_regents() -> PathBuf {
    PathBuf::from("regents.csv")
}
fn default_output() -> PathBuf {
    PathBuf::from("schedules.html")
}
fn default_title() -> String {
    "Official Document Schedules".to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub kstate: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub regents: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub standalone: Option<bool>,
}

/// Load configuration from the config file if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

/// Merge the config file with command-line overrides.
fn resolve(file_config: ConfigFile, overrides: Overrides) -> GenerateConfig {
    let mut config = GenerateConfig::new(
        overrides.kstate.unwrap_or(file_config.inputs.kstate),
        overrides.state.unwrap_or(file_config.inputs.state),
        overrides.regents.unwrap_or(file_config.inputs.regents),
        overrides.output.unwrap_or(file_config.output.path),
    );
    config.standalone = overrides.standalone.unwrap_or(file_config.output.standalone);
    config.title = file_config.output.title;
    config.minify_css = file_config.output.minify_css;
    config
}

/// Run the build command.
///
/// Generation failures are reported through the returned status; only config
/// problems are returned as errors.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<ConversionStatus> {
    tracing::info!("Building schedule page...");

    let config = resolve(load_config(config_path)?, overrides);
    let output = config.output.clone();

    match DocumentGenerator::new(config).generate() {
        Ok(result) => {
            for section in &result.sections {
                tracing::debug!("Section {}: {} rows", section.id, section.rows);
            }
            tracing::info!(
                "Rendered {} rows in {} lines in {}ms",
                result.total_rows(),
                result.lines,
                result.duration_ms
            );
            tracing::info!("Output: {}", result.output.display());
            Ok(ConversionStatus::success())
        }
        Err(e) => {
            tracing::error!("{}", e);
            tracing::debug!("Output left untouched: {}", output.display());
            Ok(ConversionStatus::failure(e.to_string()))
        }
    }
}
