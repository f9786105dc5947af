use std::path::Path;

use aws_config::BehaviorVersion;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use super::cdn_url;
use crate::config::AwsConfig;
use crate::error::TtsError;
use crate::AudioStore;

const CREDENTIALS_PROVIDER: &str = "tts-uploader-static";

/// S3 bucket store using long-lived static credentials.
///
/// The SDK is async; uploads are driven to completion on a private
/// current-thread runtime so callers stay fully blocking.
pub struct S3Store {
    runtime: tokio::runtime::Runtime,
    client: Client,
    bucket: String,
    cdn_base: String,
}

impl S3Store {
    pub fn new(config: &AwsConfig) -> Result<Self, TtsError> {
        Self::build(config, None)
    }

    /// `endpoint` redirects requests to an S3-compatible server using path-style addressing.
    fn build(config: &AwsConfig, endpoint: Option<&str>) -> Result<Self, TtsError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );
        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .credentials_provider(credentials)
                .load(),
        );

        let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(url) = endpoint {
            s3_config = s3_config.endpoint_url(url).force_path_style(true);
        }
        let client = Client::from_conf(s3_config.build());
        log::info!(
            "S3 store ready for bucket {} in {}",
            config.bucket,
            config.region
        );

        Ok(Self {
            runtime,
            client,
            bucket: config.bucket.clone(),
            cdn_base: config.cdn_base.clone(),
        })
    }

    async fn put_file(&self, audio_path: &Path, key: &str) -> Result<(), TtsError> {
        let upload_error = |message: String| TtsError::Upload {
            key: key.to_string(),
            message,
        };

        let body = ByteStream::from_path(audio_path)
            .await
            .map_err(|e| upload_error(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|e| upload_error(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }
}

impl AudioStore for S3Store {
    fn store(&self, audio_path: &Path, key: &str) -> Result<String, TtsError> {
        self.runtime.block_on(self.put_file(audio_path, key))?;
        log::debug!("Uploaded s3://{}/{key}", self.bucket);
        Ok(cdn_url(&self.cdn_base, key))
    }
}
