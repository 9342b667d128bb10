//! Provider credentials loaded from an env file.
//!
//! The file is read once at startup with `dotenvy`'s iterator API, so the
//! process environment is never mutated. Keys the file does not define fall
//! back to the process environment. A missing file is only a warning: the
//! health endpoint works without credentials, and the search endpoint
//! reports the gap at request time.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const API_HOST_VAR: &str = "RAPIDAPI_HOST";

/// Immutable provider secrets shared by every request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderCredentials {
    api_key: Option<String>,
    api_host: Option<String>,
}

impl ProviderCredentials {
    /// Build credentials from raw values. Blank values count as absent.
    pub fn new(api_key: Option<String>, api_host: Option<String>) -> Self {
        Self {
            api_key: non_blank(api_key),
            api_host: non_blank(api_host),
        }
    }

    /// Build credentials from `KEY=VALUE` pairs, ignoring unrelated keys.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: HashMap<String, String> = pairs.into_iter().collect();
        Self::new(entries.remove(API_KEY_VAR), entries.remove(API_HOST_VAR))
    }

    /// Load credentials from `env_file`, falling back to the process environment.
    ///
    /// A key that is absent or blank in the file is looked up in the
    /// environment instead.
    pub fn load(env_file: &Path) -> Self {
        let from_file = Self::from_pairs(read_env_file(env_file));

        Self::new(
            from_file.api_key.or_else(|| std::env::var(API_KEY_VAR).ok()),
            from_file.api_host.or_else(|| std::env::var(API_HOST_VAR).ok()),
        )
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    /// True when both the key and the host are present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.api_host.is_some()
    }
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_host", &self.api_host)
            .finish()
    }
}

/// Entries of `path`, skipping malformed lines. A missing file yields none.
fn read_env_file(path: &Path) -> Vec<(String, String)> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter
            .filter_map(|item| match item {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping malformed env file entry");
                    None
                }
            })
            .collect(),
        Err(e) if e.not_found() => {
            tracing::warn!(path = %path.display(), "Env file not found, using process environment");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not load env file");
            Vec::new()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn blank_values_are_absent() {
        let creds = ProviderCredentials::new(Some("   ".into()), Some(" host.example ".into()));
        assert_eq!(creds.api_key(), None);
        assert_eq!(creds.api_host(), Some("host.example"));
        assert!(!creds.is_configured());
    }

    #[test]
    fn from_pairs_picks_known_keys() {
        let creds = ProviderCredentials::from_pairs(vec![
            pair("OTHER", "x"),
            pair(API_KEY_VAR, "secret"),
            pair(API_HOST_VAR, "aerodatabox.p.rapidapi.com"),
        ]);
        assert_eq!(creds.api_key(), Some("secret"));
        assert_eq!(creds.api_host(), Some("aerodatabox.p.rapidapi.com"));
        assert!(creds.is_configured());
    }

    #[test]
    fn debug_redacts_key() {
        let creds = ProviderCredentials::new(Some("top-secret".into()), None);
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn load_reads_env_file() {
        let path = std::env::temp_dir().join(format!("flight-gateway-{}.env", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "# provider secrets\nRAPIDAPI_KEY=file-key\n\nRAPIDAPI_HOST=file-host\n",
        )
        .unwrap();

        let creds = ProviderCredentials::load(&path);
        fs::remove_file(&path).ok();

        assert_eq!(creds.api_key(), Some("file-key"));
        assert_eq!(creds.api_host(), Some("file-host"));
        assert!(creds.is_configured());
    }

    #[test]
    fn env_file_entries_ignore_unrelated_keys() {
        let path = std::env::temp_dir().join(format!("flight-gateway-{}.env", uuid::Uuid::new_v4()));
        fs::write(&path, "DEBUG=1\nRAPIDAPI_KEY=file-key\nPORT=5001\n").unwrap();

        let entries = read_env_file(&path);
        fs::remove_file(&path).ok();

        assert_eq!(entries.len(), 3);
        let creds = ProviderCredentials::from_pairs(entries);
        assert_eq!(creds.api_key(), Some("file-key"));
    }

    #[test]
    fn missing_file_is_not_fatal() {
        let path = std::env::temp_dir().join(format!("missing-{}.env", uuid::Uuid::new_v4()));
        assert!(read_env_file(&path).is_empty());
        // Whatever the process environment holds, loading must not panic.
        let _ = ProviderCredentials::load(&path);
    }
}
