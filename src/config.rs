//! Runtime configuration.
//!
//! Secrets are read once at startup, either from a TOML file laid out like a
//! Streamlit `secrets.toml`:
//!
//! ```toml
//! [azure]
//! AZURE_TTS_URL = "https://example.openai.azure.com/openai/deployments/tts/audio/speech?api-version=2025-03-01-preview"
//! AZURE_API_KEY = "..."
//!
//! [aws]
//! AWS_ACCESS_KEY = "..."
//! AWS_SECRET_KEY = "..."
//! AWS_REGION = "ap-south-1"
//! AWS_BUCKET = "media-bucket"
//! S3_PREFIX = "tts/audio/"
//! CDN_BASE = "https://cdn.example.com/"
//! ```
//!
//! or from environment variables with the same names. Values are only
//! checked for presence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use serde::Deserialize;

use crate::error::TtsError;

/// Directory used for transient audio files when none is configured.
pub const DEFAULT_TEMP_DIR: &str = "temp";

/// Environment variable overriding the temp directory in [`Config::from_env`].
pub const TEMP_DIR_VAR: &str = "TTS_TEMP_DIR";

const REDACTED: &str = "<redacted>";

/// Credentials and endpoint of the speech synthesis deployment.
#[derive(Clone, Deserialize, Builder)]
#[builder(setter(into))]
pub struct AzureConfig {
    #[serde(rename = "AZURE_TTS_URL")]
    pub tts_url: String,
    #[serde(rename = "AZURE_API_KEY")]
    pub api_key: String,
}

/// Bucket, credentials and public URL layout of the audio store.
#[derive(Clone, Deserialize, Builder)]
#[builder(setter(into))]
pub struct AwsConfig {
    #[serde(rename = "AWS_ACCESS_KEY")]
    pub access_key: String,
    #[serde(rename = "AWS_SECRET_KEY")]
    pub secret_key: String,
    #[serde(rename = "AWS_REGION")]
    pub region: String,
    #[serde(rename = "AWS_BUCKET")]
    pub bucket: String,
    /// Prepended verbatim to every generated object key.
    #[serde(rename = "S3_PREFIX")]
    pub s3_prefix: String,
    /// Prepended verbatim to the object key to form the playback URL.
    #[serde(rename = "CDN_BASE")]
    pub cdn_base: String,
}

#[derive(Debug, Clone, Deserialize, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub azure: AzureConfig,
    pub aws: AwsConfig,
    /// Where synthesized audio is staged before upload.
    #[serde(default = "default_temp_dir")]
    #[builder(default = "default_temp_dir()")]
    pub temp_dir: PathBuf,
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMP_DIR)
}

impl Config {
    /// Load configuration from a secrets TOML file.
    pub fn load(path: &Path) -> Result<Self, TtsError> {
        let raw = fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, TtsError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, TtsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary name lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TtsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).ok_or(TtsError::MissingSetting(name));

        Ok(Self {
            azure: AzureConfig {
                tts_url: get("AZURE_TTS_URL")?,
                api_key: get("AZURE_API_KEY")?,
            },
            aws: AwsConfig {
                access_key: get("AWS_ACCESS_KEY")?,
                secret_key: get("AWS_SECRET_KEY")?,
                region: get("AWS_REGION")?,
                bucket: get("AWS_BUCKET")?,
                s3_prefix: get("S3_PREFIX")?,
                cdn_base: get("CDN_BASE")?,
            },
            temp_dir: lookup(TEMP_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_temp_dir),
        })
    }
}

impl fmt::Debug for AzureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureConfig")
            .field("tts_url", &self.tts_url)
            .field("api_key", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &REDACTED)
            .field("region", &self.region)
            .field("bucket", &self.bucket)
            .field("s3_prefix", &self.s3_prefix)
            .field("cdn_base", &self.cdn_base)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRETS: &str = r#"
[azure]
AZURE_TTS_URL = "https://tts.example.com/speech"
AZURE_API_KEY = "azure-secret"

[aws]
AWS_ACCESS_KEY = "AKIAEXAMPLE"
AWS_SECRET_KEY = "aws-secret"
AWS_REGION = "ap-south-1"
AWS_BUCKET = "media"
S3_PREFIX = "tts/"
CDN_BASE = "https://cdn.example.com/"
"#;

    #[test]
    fn parses_streamlit_secrets_layout() {
        let config = Config::from_toml(SECRETS).unwrap();
        assert_eq!(config.azure.tts_url, "https://tts.example.com/speech");
        assert_eq!(config.azure.api_key, "azure-secret");
        assert_eq!(config.aws.region, "ap-south-1");
        assert_eq!(config.aws.bucket, "media");
        assert_eq!(config.aws.s3_prefix, "tts/");
        assert_eq!(config.aws.cdn_base, "https://cdn.example.com/");
        assert_eq!(config.temp_dir, PathBuf::from(DEFAULT_TEMP_DIR));
    }

    #[test]
    fn missing_key_fails_to_load() {
        let without_bucket = SECRETS.replace("AWS_BUCKET = \"media\"\n", "");
        let err = Config::from_toml(&without_bucket).unwrap_err();
        assert!(matches!(err, TtsError::Secrets(_)));
        assert!(err.to_string().contains("AWS_BUCKET"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        fs::write(&path, SECRETS).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.aws.access_key, "AKIAEXAMPLE");
    }

    #[test]
    fn lookup_reports_first_missing_setting() {
        let vars: HashMap<&str, &str> = [
            ("AZURE_TTS_URL", "https://tts.example.com/speech"),
            ("AZURE_API_KEY", "k"),
        ]
        .into_iter()
        .collect();
        let err = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap_err();
        assert!(matches!(err, TtsError::MissingSetting("AWS_ACCESS_KEY")));
    }

    #[test]
    fn lookup_builds_full_config() {
        let vars: HashMap<&str, &str> = [
            ("AZURE_TTS_URL", "u"),
            ("AZURE_API_KEY", "k"),
            ("AWS_ACCESS_KEY", "a"),
            ("AWS_SECRET_KEY", "s"),
            ("AWS_REGION", "us-east-1"),
            ("AWS_BUCKET", "b"),
            ("S3_PREFIX", "p/"),
            ("CDN_BASE", "https://cdn/"),
            (TEMP_DIR_VAR, "/tmp/tts"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|name| vars.get(name).map(|v| v.to_string())).unwrap();
        assert_eq!(config.aws.s3_prefix, "p/");
        assert_eq!(config.temp_dir, PathBuf::from("/tmp/tts"));
    }

    #[test]
    fn builder_defaults_temp_dir() {
        let config = ConfigBuilder::default()
            .azure(
                AzureConfigBuilder::default()
                    .tts_url("u")
                    .api_key("k")
                    .build()
                    .unwrap(),
            )
            .aws(
                AwsConfigBuilder::default()
                    .access_key("a")
                    .secret_key("s")
                    .region("r")
                    .bucket("b")
                    .s3_prefix("p/")
                    .cdn_base("c/")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(config.temp_dir, PathBuf::from(DEFAULT_TEMP_DIR));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::from_toml(SECRETS).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("azure-secret"));
        assert!(!rendered.contains("aws-secret"));
        assert!(rendered.contains("AKIAEXAMPLE"));
        assert!(rendered.contains(REDACTED));
    }
}
