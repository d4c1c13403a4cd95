use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Parser, Default, Clone, PartialEq)]
#[serde(default)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Directories of domain descriptor files (one domain per .json/.yaml file)
    #[arg(short = 'i', long = "input")]
    pub input: Option<Vec<PathBuf>>,

    /// Files mapping domain names to field schemas
    #[arg(long = "include")]
    pub include: Option<Vec<PathBuf>>,

    /// Custom route files (one fragment or an array of fragments each)
    #[arg(short = 'r', long = "routes")]
    pub routes: Option<Vec<PathBuf>>,

    /// File with top-level overrides for the swagger envelope
    #[arg(long = "options")]
    pub options: Option<PathBuf>,

    /// Overrides the envelope `host`
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Overrides the envelope `basePath`
    #[arg(long = "base-path")]
    #[serde(rename = "base-path", alias = "base_path")]
    pub base_path: Option<String>,

    /// Output directory for swagger.json and spec.js (defaults to .)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file (toml)
    #[arg(long = "config")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

#[derive(Deserialize)]
struct CargoConfig {
    package: Option<CargoPackage>,
}

#[derive(Deserialize)]
struct CargoPackage {
    metadata: Option<CargoMetadata>,
}

#[derive(Deserialize)]
struct CargoMetadata {
    #[serde(rename = "crud-swagger")]
    crud_swagger: Option<Config>,
}

impl Config {
    /// Load configuration with priority:
    /// 1. CLI Arguments (Highest)
    /// 2. --config file
    /// 3. swagger.toml
    /// 4. Cargo.toml [package.metadata.crud-swagger]
    pub fn load() -> Self {
        Self::layered(Config::parse())
    }

    fn layered(cli_args: Config) -> Self {
        let mut final_config = Config::default();

        if let Ok(cargo_conf) = load_cargo_toml("Cargo.toml") {
            final_config.merge(cargo_conf);
        }

        if let Ok(toml_conf) = load_toml_file("swagger.toml") {
            final_config.merge(toml_conf);
        }

        if let Some(path) = &cli_args.config_file {
            match load_toml_file(path) {
                Ok(file_conf) => final_config.merge(file_conf),
                Err(e) => log::warn!("Ignoring config file {:?}: {}", path, e),
            }
        }

        final_config.merge(cli_args);

        final_config
    }

    /// Field-wise overlay: every field set in `other` wins.
    pub fn merge(&mut self, other: Config) {
        if let Some(input) = other.input {
            self.input = Some(input);
        }
        if let Some(include) = other.include {
            self.include = Some(include);
        }
        if let Some(routes) = other.routes {
            self.routes = Some(routes);
        }
        if let Some(options) = other.options {
            self.options = Some(options);
        }
        if let Some(host) = other.host {
            self.host = Some(host);
        }
        if let Some(base_path) = other.base_path {
            self.base_path = Some(base_path);
        }
        if let Some(output) = other.output {
            self.output = Some(output);
        }
        if let Some(config_file) = other.config_file {
            self.config_file = Some(config_file);
        }
    }
}

fn load_cargo_toml<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config: CargoConfig = toml::from_str(&content)?;
    Ok(config
        .package
        .and_then(|p| p.metadata)
        .and_then(|m| m.crud_swagger)
        .unwrap_or_default())
}

pub fn load_toml_file<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
