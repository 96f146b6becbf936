use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use registra_models::{service::ServiceOptions, whatsapp::WhatsAppTargetNumber};
use serde::Deserialize;
use url::Url;

/// The built-in configuration. Files passed to [`load`] are layered on top.
pub const DEFAULT_CONFIG: &str = include_str!("../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    let sources = paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    from_sources(sources.iter().map(String::as_str))
}

fn from_sources<'a>(sources: impl IntoIterator<Item = &'a str>) -> anyhow::Result<Config> {
    std::iter::once(DEFAULT_CONFIG)
        .chain(sources)
        .fold(config::Config::builder(), |builder, content| {
            builder.add_source(File::from_str(content, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub registration: RegistrationConfig,
    pub whatsapp: WhatsAppConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Deserialize)]
pub struct RegistrationConfig {
    pub services: ServiceOptions,
}

#[derive(Debug, Deserialize)]
pub struct WhatsAppConfig {
    pub target_number: WhatsAppTargetNumber,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct DispatchConfig {
    pub mode: DispatchMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    Browser,
    Print,
}
