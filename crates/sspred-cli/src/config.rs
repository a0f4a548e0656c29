use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, Result};
use clap::ValueEnum;
use serde::Deserialize;
use sspred::engine::config::{self as core_config, Method};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPredictionConfig {
    methods: Option<Vec<Method>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialTablesConfig {
    #[serde(rename = "propensity-table")]
    propensity_table: Option<PathBuf>,
    #[serde(rename = "context-table")]
    context_table: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<OutputFormat>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    prediction: Option<PartialPredictionConfig>,
    tables: Option<PartialTablesConfig>,
    output: Option<PartialOutputConfig>,
}

#[derive(Debug)]
pub struct AppConfig {
    pub core_config: core_config::PredictionConfig,
    pub format: OutputFormat,
}

pub fn load(cli: &Cli) -> Result<AppConfig> {
    let partial = match &cli.config {
        Some(path) => PartialAppConfig::from_file(path)?,
        None => PartialAppConfig::default(),
    };
    partial.merge_with_cli(cli)
}

impl PartialAppConfig {
    /// Relative table paths in the file are resolved against the file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        if let (Some(base), Some(tables)) = (path.parent(), config.tables.as_mut()) {
            for table_path in [&mut tables.propensity_table, &mut tables.context_table]
                .into_iter()
                .flatten()
            {
                if table_path.is_relative() {
                    *table_path = base.join(&*table_path);
                }
            }
        }
        Ok(config)
    }

    pub fn merge_with_cli(mut self, cli: &Cli) -> Result<AppConfig> {
        self.apply_set_values(&cli.set_values)?;

        let prediction = self.prediction.take().unwrap_or_default();
        let tables = self.tables.take().unwrap_or_default();
        let output = self.output.take().unwrap_or_default();

        let methods = if !cli.methods.is_empty() {
            cli.methods.clone()
        } else {
            prediction.methods.unwrap_or_else(|| vec![Method::ChouFasman])
        };

        let core_config = core_config::PredictionConfigBuilder::new()
            .methods(methods)
            .propensity_table_path(cli.propensity_table.clone().or(tables.propensity_table))
            .context_table_path(cli.context_table.clone().or(tables.context_table))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            core_config,
            format: cli.format.or(output.format).unwrap_or_default(),
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key.trim() {
                "prediction.methods" => {
                    let methods = value_str
                        .split(',')
                        .filter(|s| !s.trim().is_empty())
                        .map(str::parse::<Method>)
                        .collect::<std::result::Result<Vec<_>, _>>()
                        .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e)))?;
                    self.prediction.get_or_insert_with(Default::default).methods = Some(methods);
                }
                "tables.propensity-table" => {
                    self.tables
                        .get_or_insert_with(Default::default)
                        .propensity_table = Some(PathBuf::from(value_str));
                }
                "tables.context-table" => {
                    self.tables.get_or_insert_with(Default::default).context_table =
                        Some(PathBuf::from(value_str));
                }
                "output.format" => {
                    let format = OutputFormat::from_str(value_str, true).map_err(|_| {
                        CliError::Config(format!(
                            "Invalid value for {}: {} (expected 'text' or 'csv')",
                            key, value_str
                        ))
                    })?;
                    self.output.get_or_insert_with(Default::default).format = Some(format);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
