//! # tts-uploader
//!
//! Batch text-to-speech for slide and paragraph narration: every entry of a
//! JSON document is synthesized through a remote TTS endpoint, uploaded to
//! object storage, and mapped to a public CDN URL.
//!
//! ## Features
//!
//! - **azure**: Azure OpenAI `tts-1-hd` speech synthesis over HTTPS
//! - **s3**: Audio upload to an S3 bucket with static credentials
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use tts_uploader::{
//!     config::Config, converter::BatchConverter, document, engines::azure::AzureSpeech,
//!     storage::s3::S3Store, OutputMode, Voice,
//! };
//!
//! let config = Config::load(&PathBuf::from("secrets.toml"))?;
//! let speech = AzureSpeech::new(&config.azure)?;
//! let store = S3Store::new(&config.aws)?;
//!
//! let paragraphs = document::load_paragraphs(&PathBuf::from("slides.json"))?;
//! let converter = BatchConverter::new(speech, store, &config);
//! let output = converter.convert(&paragraphs, Voice::Nova, OutputMode::Keyed)?;
//! output.write_json(&PathBuf::from("Output_data.json"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod converter;
pub mod document;
pub mod engines;
pub mod error;
pub mod storage;
pub mod voice;

use std::fs;
use std::path::Path;

pub use document::{AudioEntry, OutputDocument, OutputMode, Paragraphs};
pub use error::TtsError;
pub use voice::Voice;

/// The result of a synthesis (text-to-speech) request.
///
/// Holds the encoded audio exactly as the endpoint returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Encoded audio bytes (MP3 for the Azure endpoint)
    pub bytes: Vec<u8>,
}

impl SynthesizedAudio {
    /// Write the audio bytes to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> Result<(), TtsError> {
        fs::write(path, &self.bytes)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Common interface for remote speech synthesis endpoints.
pub trait SpeechSynthesizer {
    /// Synthesize `text` with the given voice.
    fn synthesize(&self, text: &str, voice: Voice) -> Result<SynthesizedAudio, TtsError>;

    /// Synthesize `text` and write the audio to `path`.
    ///
    /// Default implementation calls `synthesize()` then `SynthesizedAudio::write_file()`,
    /// so nothing is written when synthesis fails.
    fn synthesize_to_file(&self, text: &str, voice: Voice, path: &Path) -> Result<(), TtsError> {
        self.synthesize(text, voice)?.write_file(path)
    }
}

/// Common interface for object stores that publish uploaded audio.
pub trait AudioStore {
    /// Upload the file at `audio_path` under `key` and return its public URL.
    fn store(&self, audio_path: &Path, key: &str) -> Result<String, TtsError>;
}

impl<T: SpeechSynthesizer + ?Sized> SpeechSynthesizer for &T {
    fn synthesize(&self, text: &str, voice: Voice) -> Result<SynthesizedAudio, TtsError> {
        (**self).synthesize(text, voice)
    }
}

impl<T: AudioStore + ?Sized> AudioStore for &T {
    fn store(&self, audio_path: &Path, key: &str) -> Result<String, TtsError> {
        (**self).store(audio_path, key)
    }
}
