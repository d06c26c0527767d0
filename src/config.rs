use crate::quirk::DeviceDescriptor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Load environment variables from .env file with robust parsing.
/// Handles values with spaces without requiring quotes.
pub fn load_dotenv() {
    load_dotenv_from(Path::new(".env"));
}

/// Same as [`load_dotenv`] but reads an explicit file.
pub fn load_dotenv_from(env_path: &Path) {
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", env_path.display(), e);
            return;
        }
    };

    for (key, value) in parse_dotenv(&content) {
        // Only set if not already set (env vars take precedence)
        if std::env::var(key).is_err() {
            // SAFETY: called from main before any other thread is spawned
            unsafe { std::env::set_var(key, value) };
        }
    }
}

/// Split `.env` content into key/value pairs, skipping blanks and comments.
fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Find the first '=' and split there
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            let mut value = line[eq_pos + 1..].trim();

            // Remove surrounding quotes if present
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }

            if !key.is_empty() {
                pairs.push((key, value));
            }
        }
    }

    pairs
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Restricts which registered descriptors are dumped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    pub vendor: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl FilterConfig {
    /// Whether a (vendor, model) identity passes this filter.
    ///
    /// Matching is exact and case-sensitive, like device discovery.
    pub fn matches(&self, vendor: &str, model: &str) -> bool {
        self.vendor.as_deref().is_none_or(|v| v == vendor)
            && self.model.as_deref().is_none_or(|m| m == model)
    }

    /// Whether a descriptor passes this filter under any of its identities,
    /// aliases included.
    pub fn matches_descriptor(&self, descriptor: &DeviceDescriptor) -> bool {
        descriptor
            .identities()
            .any(|id| self.matches(&id.vendor, &id.model))
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(vendor) = lookup("QUIRK_VENDOR") {
            config.filter.vendor = Some(vendor);
        }
        if let Some(model) = lookup("QUIRK_MODEL") {
            config.filter.model = Some(model);
        }
        if let Some(pretty) = lookup("QUIRK_PRETTY")
            && let Ok(p) = pretty.parse()
        {
            config.output.pretty = p;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quirk::QuirkBuilder;
    use std::collections::HashMap;

    #[test]
    fn test_parse_dotenv_skips_comments_and_strips_quotes() {
        let content = "# comment\n\nQUIRK_VENDOR = \"EfektaLab\"\nQUIRK_MODEL=Some Model\n=novalue\n";
        let pairs = parse_dotenv(content);
        assert_eq!(
            pairs,
            vec![("QUIRK_VENDOR", "EfektaLab"), ("QUIRK_MODEL", "Some Model")]
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None);
        assert!(config.output.pretty);
        assert!(config.filter.vendor.is_none());
        assert!(config.filter.matches("any", "thing"));
    }

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            ("QUIRK_VENDOR", "EfektaLab"),
            ("QUIRK_PRETTY", "false"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| env.get(k).map(|v| v.to_string()));

        assert!(!config.output.pretty);
        assert!(config.filter.matches("EfektaLab", "EFEKTA_AQ_Smart_Monitor_Gen2"));
        assert!(!config.filter.matches("efektalab", "EFEKTA_AQ_Smart_Monitor_Gen2"));
    }

    #[test]
    fn test_invalid_pretty_keeps_default() {
        let config = Config::from_lookup(|k| (k == "QUIRK_PRETTY").then(|| "maybe".to_string()));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_filter_matches_alias_identity() {
        let mut builder = QuirkBuilder::new("efektalab", "EFEKTA_AQ_Smart_Monitor_Gen2");
        builder.also_applies_to("efektalab", "EFEKTA_AQ_Smart_Monitor_Gen2_Rev2");
        let descriptor = builder.finalize().unwrap();

        let config = Config::from_lookup(|k| {
            (k == "QUIRK_MODEL").then(|| "EFEKTA_AQ_Smart_Monitor_Gen2_Rev2".to_string())
        });
        assert!(!config.filter.matches(descriptor.vendor(), descriptor.model()));
        assert!(config.filter.matches_descriptor(&descriptor));

        let config = Config::from_lookup(|k| (k == "QUIRK_MODEL").then(|| "Other".to_string()));
        assert!(!config.filter.matches_descriptor(&descriptor));
    }
}
