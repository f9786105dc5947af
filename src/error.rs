#[derive(thiserror::Error, Debug)]
pub enum TtsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid secrets file: {0}")]
    Secrets(#[from] toml::de::Error),
    #[error("Missing configuration value `{0}`")]
    MissingSetting(&'static str),
    #[cfg(feature = "azure")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Speech synthesis failed with HTTP {status}: {body}")]
    SynthesisStatus { status: u16, body: String },
    #[error("Upload of `{key}` failed: {message}")]
    Upload { key: String, message: String },
}
