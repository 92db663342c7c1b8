//! Preview configuration, read from the environment.

use std::path::PathBuf;

use bizdesk_core::{DomainError, DomainResult};

use crate::navigation::Role;

pub const ROLE_VAR: &str = "BIZDESK_ROLE";
pub const OUTPUT_DIR_VAR: &str = "BIZDESK_OUTPUT_DIR";
pub const FORMAT_VAR: &str = "BIZDESK_FORMAT";

/// How rendered views are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub role: Role,
    /// Write one file per view here; `None` writes to stdout.
    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            role: Role::Sales,
            output_dir: None,
            format: OutputFormat::Html,
        }
    }
}

impl PreviewConfig {
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(role) = get(ROLE_VAR) {
            config.role = role.parse()?;
        }
        config.output_dir = get(OUTPUT_DIR_VAR).map(PathBuf::from);
        if let Some(format) = get(FORMAT_VAR) {
            config.format = match format.trim().to_ascii_lowercase().as_str() {
                "html" => OutputFormat::Html,
                "json" => OutputFormat::Json,
                other => {
                    return Err(DomainError::validation(format!(
                        "unknown output format '{other}'"
                    )));
                }
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = PreviewConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.role, Role::Sales);
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn reads_all_values() {
        let config = PreviewConfig::from_lookup(lookup(&[
            (ROLE_VAR, "clerk"),
            (OUTPUT_DIR_VAR, "/tmp/out"),
            (FORMAT_VAR, "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.role, Role::Clerk);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn empty_values_are_ignored() {
        let config =
            PreviewConfig::from_lookup(lookup(&[(ROLE_VAR, ""), (OUTPUT_DIR_VAR, "  ")])).unwrap();
        assert_eq!(config, PreviewConfig::default());
    }

    #[test]
    fn rejects_unknown_role_and_format() {
        assert!(matches!(
            PreviewConfig::from_lookup(lookup(&[(ROLE_VAR, "admin")])),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            PreviewConfig::from_lookup(lookup(&[(FORMAT_VAR, "pdf")])),
            Err(DomainError::Validation(_))
        ));
    }
}
