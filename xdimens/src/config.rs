use anyhow::{Context, Result};
use dimens::{GenerationRequest, PackageName};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "dimens.yaml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    out_dir: Option<PathBuf>,
    package: Option<String>,
    package_file: Option<PathBuf>,
    #[serde(default)]
    dpis: Vec<String>,
}

/// Contents of a `dimens.yaml`, with paths resolved against its directory.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub out_dir: Option<PathBuf>,
    pub package: Option<String>,
    pub package_file: Option<PathBuf>,
    pub dpis: Vec<String>,
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: RawConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self {
            out_dir: config.out_dir.map(|dir| base.join(dir)),
            package: config.package,
            package_file: config.package_file.map(|file| base.join(file)),
            dpis: config.dpis,
        })
    }
}

/// Values given on the command line, which take precedence over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub package: Option<String>,
    pub package_file: Option<PathBuf>,
    pub dpis: Vec<String>,
}

pub fn build_request(config: Config, overrides: Overrides) -> Result<GenerationRequest> {
    let out_dir = overrides
        .out_dir
        .or(config.out_dir)
        .context("no output directory, pass --out or set out_dir")?;
    let package = if overrides.package.is_some() || overrides.package_file.is_some() {
        PackageName::from_parts(overrides.package, overrides.package_file)?
    } else {
        PackageName::from_parts(config.package, config.package_file)?
    };
    let dpis = if overrides.dpis.is_empty() {
        config.dpis
    } else {
        overrides.dpis
    };
    Ok(GenerationRequest::new(out_dir, package).with_dpis(dpis))
}
