use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use tracing::warn;
use url::Url;

use crate::profile::{Profile, SubmissionPolicy};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_CONFIG_FILE: &str = "attrition.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub backend_url: String,
    pub profile: Profile,
    pub submission_policy: SubmissionPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            profile: Profile::default(),
            submission_policy: SubmissionPolicy::default(),
        }
    }
}

/// Loads settings from `attrition.toml` (or the file named by
/// `ATTRITION_CONFIG`) and then applies environment overrides.
pub fn load_settings() -> Settings {
    let path = std::env::var("ATTRITION_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
    let file = fs::read_to_string(&path).ok();
    resolve_settings(file.as_deref(), |name| std::env::var(name).ok())
}

pub(crate) fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<HashMap<String, String>>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("backend_url") {
                    settings.backend_url = v.clone();
                }
                if let Some(v) = file_cfg.get("profile") {
                    apply_parsed(&mut settings.profile, v, "profile");
                }
                if let Some(v) = file_cfg.get("submission_policy") {
                    apply_parsed(&mut settings.submission_policy, v, "submission_policy");
                }
            }
            Err(err) => warn!("ignoring unreadable settings file: {err}"),
        }
    }

    if let Some(v) = env("ATTRITION_BACKEND_URL") {
        settings.backend_url = v;
    }
    if let Some(v) = env("APP__BACKEND_URL") {
        settings.backend_url = v;
    }

    if let Some(v) = env("ATTRITION_PROFILE") {
        apply_parsed(&mut settings.profile, &v, "ATTRITION_PROFILE");
    }
    if let Some(v) = env("APP__PROFILE") {
        apply_parsed(&mut settings.profile, &v, "APP__PROFILE");
    }

    if let Some(v) = env("ATTRITION_SUBMISSION_POLICY") {
        apply_parsed(&mut settings.submission_policy, &v, "ATTRITION_SUBMISSION_POLICY");
    }

    settings
}

fn apply_parsed<T>(slot: &mut T, raw: &str, source: &str)
where
    T: std::str::FromStr<Err = String>,
{
    match raw.parse::<T>() {
        Ok(value) => *slot = value,
        Err(err) => warn!(source, "ignoring setting: {err}"),
    }
}

pub fn prepare_backend_url(raw_backend_url: &str) -> anyhow::Result<Url> {
    let normalized = normalize_backend_url(raw_backend_url);
    Url::parse(&normalized)
        .with_context(|| format!("invalid prediction backend url '{normalized}'"))
}

pub(crate) fn normalize_backend_url(raw_backend_url: &str) -> String {
    let raw_backend_url = raw_backend_url.trim();

    if raw_backend_url.is_empty() {
        return DEFAULT_BACKEND_URL.to_string();
    }

    let with_scheme = if raw_backend_url.contains("://") {
        raw_backend_url.to_string()
    } else {
        format!("http://{raw_backend_url}")
    };

    with_scheme.trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
