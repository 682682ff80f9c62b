/*
[INPUT]:  YAML configuration file (optional)
[OUTPUT]: Parsed viewer configuration with defaults filled in
[POS]:    Configuration layer - dataset endpoints, HTTP and layout settings
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, bail};
use arc_task_adapter::{ClientConfig, DatasetVersion, Subset};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration for the task viewer
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewerConfig {
    /// Dataset version selected at startup (1 or 2)
    #[serde(default)]
    pub dataset_version: DatasetVersion,
    /// Subset selected at startup
    #[serde(default)]
    pub subset: Subset,
    /// Contents API directory for ARC 1
    #[serde(default = "default_arc1_api_base")]
    pub arc1_api_base: String,
    /// Contents API directory for ARC 2
    #[serde(default = "default_arc2_api_base")]
    pub arc2_api_base: String,
    /// HTTP settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Display area used for cell sizing
    #[serde(default)]
    pub display: DisplayConfig,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overrides the default User-Agent header
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Container size the grids are laid out in
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_container_side")]
    pub container_height: u32,
    #[serde(default = "default_container_side")]
    pub container_width: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            dataset_version: DatasetVersion::default(),
            subset: Subset::default(),
            arc1_api_base: default_arc1_api_base(),
            arc2_api_base: default_arc2_api_base(),
            http: HttpConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            container_height: default_container_side(),
            container_width: default_container_side(),
        }
    }
}

fn default_arc1_api_base() -> String {
    DatasetVersion::Arc1.default_api_base().to_string()
}

fn default_arc2_api_base() -> String {
    DatasetVersion::Arc2.default_api_base().to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_container_side() -> u32 {
    500
}

impl ViewerConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/arc-task-viewer/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arc-task-viewer").join("config.yaml"))
    }

    /// Explicit path, else the default path when it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.arc1_api_base.trim().is_empty() || self.arc2_api_base.trim().is_empty() {
            bail!("API bases must not be empty");
        }
        if self.http.timeout_secs == 0 {
            bail!("http.timeout_secs must be greater than zero");
        }
        if self.display.container_height == 0 || self.display.container_width == 0 {
            bail!("display container must have a non-zero size");
        }
        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            timeout: Duration::from_secs(self.http.timeout_secs),
            connect_timeout: Duration::from_secs(self.http.connect_timeout_secs),
            ..ClientConfig::default()
        };
        if let Some(user_agent) = &self.http.user_agent {
            config.user_agent = user_agent.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio_test::assert_ok;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("{}").expect("parse");
        assert_eq!(config.dataset_version, DatasetVersion::Arc2);
        assert_eq!(config.subset, Subset::Training);
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.display.container_width, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
dataset_version: 1
subset: evaluation
arc1_api_base: http://localhost:8080/data
http:
  timeout_secs: 5
  user_agent: tester
"#;
        let config: ViewerConfig = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(config.dataset_version, DatasetVersion::Arc1);
        assert_eq!(config.subset, Subset::Evaluation);
        assert_eq!(config.arc1_api_base, "http://localhost:8080/data");
        assert_eq!(config.arc2_api_base, DatasetVersion::Arc2.default_api_base());

        let client = config.client_config();
        assert_eq!(client.timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
        assert_eq!(client.user_agent, "tester");
    }

    #[test]
    fn test_invalid_version_rejected() {
        assert!(serde_yaml::from_str::<ViewerConfig>("dataset_version: 3").is_err());
    }

    #[test]
    fn test_from_file_validates() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "arc2_api_base: \"\"").expect("write");
        assert!(ViewerConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "dataset_version: 1\ndisplay:\n  container_width: 300").expect("write");

        let config = assert_ok!(ViewerConfig::from_file(file.path()));
        assert_eq!(config.dataset_version, DatasetVersion::Arc1);
        assert_eq!(config.display.container_width, 300);
        assert_eq!(config.display.container_height, 500);
    }
}
