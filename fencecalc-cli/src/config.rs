//! Configuration file loading for fencecalc.
//!
//! Discovers and loads `fencecalc.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fencecalc_types::pricing::{MaterialKind, PriceList};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "fencecalc.toml";

/// Top-level configuration from fencecalc.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FencecalcConfig {
    /// Unit prices used when no price file is passed.
    pub prices: Option<PriceList>,

    /// Output settings.
    pub output: OutputConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for `estimate`.
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Json,
    Md,
}

/// Discover the fencecalc.toml config file.
///
/// Returns `None` if no config file is found in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a fencecalc.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FencecalcConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<FencecalcConfig> {
    let config: FencecalcConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config file if given, else discover one in `dir`, else defaults.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<FencecalcConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(FencecalcConfig::default()),
    }
}

/// Load a standalone price list. `.json` files are JSON, anything else TOML.
pub fn load_price_list(path: &Utf8Path) -> anyhow::Result<PriceList> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read price list {}", path))?;
    let prices = if path.extension() == Some("json") {
        serde_json::from_str(&contents).context("invalid JSON")
    } else {
        toml::from_str(&contents).context("invalid TOML")
    };
    prices.with_context(|| format!("parse price list {}", path))
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    /// `None` when neither the config nor the CLI supplied any price.
    pub prices: Option<PriceList>,

    pub format: ReportFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: FencecalcConfig,
}

impl ConfigMerger {
    pub fn new(config: FencecalcConfig) -> Self {
        Self { config }
    }

    /// Merge with estimate command CLI arguments.
    ///
    /// A CLI price file replaces the config `[prices]` table wholesale;
    /// individual `--price` overrides are then applied on top.
    pub fn merge_estimate_args(
        self,
        cli_price_file: Option<PriceList>,
        cli_overrides: &[(MaterialKind, f64)],
        cli_format: Option<ReportFormat>,
    ) -> MergedConfig {
        let mut prices = cli_price_file.or(self.config.prices);
        if !cli_overrides.is_empty() {
            let list = prices.get_or_insert_with(PriceList::new);
            for (kind, price) in cli_overrides {
                list.set(*kind, *price);
            }
        }

        MergedConfig {
            prices,
            format: cli_format
                .or(self.config.output.format)
                .unwrap_or_default(),
        }
    }
}

/// Parse CLI price overrides from `kind=price` strings.
pub fn parse_cli_prices(entries: &[String]) -> anyhow::Result<Vec<(MaterialKind, f64)>> {
    let mut out = Vec::new();
    for entry in entries {
        let mut parts = entry.splitn(2, '=');
        let key = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid price '{}': missing material", entry))?;
        let value = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("invalid price '{}': missing value", entry))?;
        let kind = MaterialKind::from_key(key)
            .ok_or_else(|| anyhow::anyhow!("invalid price '{}': unknown material '{}'", entry, key))?;
        let price: f64 = value
            .parse()
            .with_context(|| format!("invalid price '{}': not a number", entry))?;
        out.push((kind, price));
    }
    Ok(out)
}
