use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;
use shared::{
    domain::PageKind,
    protocol::{EXAMPLES_PATH, GENERATE_PATH},
};

pub const SETTINGS_FILE_NAME: &str = "reading_client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub generate_path: String,
    pub examples_path: String,
    pub page: PageKind,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            generate_path: GENERATE_PATH.into(),
            examples_path: EXAMPLES_PATH.into(),
            page: PageKind::Horoscope,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    generate_path: Option<String>,
    examples_path: Option<String>,
    page: Option<PageKind>,
}

/// Defaults, then the first settings file found, then environment overrides.
pub fn load_settings() -> anyhow::Result<ClientSettings> {
    let file = settings_file_candidates()
        .into_iter()
        .find(|path| path.is_file());
    load_settings_from(file.as_deref(), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ClientSettings> {
    let mut settings = ClientSettings::default();

    if let Some(path) = file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        if let Some(v) = file_cfg.server_url {
            settings.server_url = v;
        }
        if let Some(v) = file_cfg.generate_path {
            settings.generate_path = v;
        }
        if let Some(v) = file_cfg.examples_path {
            settings.examples_path = v;
        }
        if let Some(v) = file_cfg.page {
            settings.page = v;
        }
    }

    if let Some(v) = env("READING_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = env("APP__GENERATE_PATH") {
        settings.generate_path = v;
    }
    if let Some(v) = env("APP__EXAMPLES_PATH") {
        settings.examples_path = v;
    }
    if let Some(v) = env("APP__PAGE") {
        settings.page = v
            .parse()
            .with_context(|| format!("invalid APP__PAGE value '{v}'"))?;
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    Ok(settings)
}

fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("reading_client").join("config.toml"));
    }
    candidates
}

fn normalize_server_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return ClientSettings::default().server_url;
    }
    if raw.contains("://") {
        raw.trim_end_matches('/').to_string()
    } else {
        format!("http://{}", raw.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
