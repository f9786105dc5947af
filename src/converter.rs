//! The batch converter.
//!
//! Entries are processed strictly one at a time in document order. For each
//! paragraph the audio is synthesized, staged in the temp directory under a
//! random name, uploaded as `<prefix><filename>`, and the staged file is
//! removed. The first failure aborts the batch: entries uploaded before it
//! stay uploaded, later entries are never attempted, and no output document
//! is returned. A staged file whose upload failed is left behind.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::Config;
use crate::document::{AudioEntry, OutputDocument, OutputMode, Paragraphs};
use crate::error::TtsError;
use crate::voice::Voice;
use crate::{AudioStore, SpeechSynthesizer};

/// File extension of staged and uploaded audio.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Generate a collision-free staging filename (`tts_<32 hex>.mp3`).
pub fn generate_filename() -> String {
    format!("tts_{}.{AUDIO_EXTENSION}", Uuid::new_v4().simple())
}

pub struct BatchConverter<S, A> {
    synthesizer: S,
    store: A,
    key_prefix: String,
    temp_dir: PathBuf,
}

impl<S: SpeechSynthesizer, A: AudioStore> BatchConverter<S, A> {
    pub fn new(synthesizer: S, store: A, config: &Config) -> Self {
        Self {
            synthesizer,
            store,
            key_prefix: config.aws.s3_prefix.clone(),
            temp_dir: config.temp_dir.clone(),
        }
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Convert every paragraph with `voice` and collect the results in `mode`.
    pub fn convert(
        &self,
        paragraphs: &Paragraphs,
        voice: Voice,
        mode: OutputMode,
    ) -> Result<OutputDocument, TtsError> {
        fs::create_dir_all(&self.temp_dir)?;

        let mut output = OutputDocument::new(mode);
        for (key, text) in paragraphs {
            log::info!("Processing: {key}");
            let entry = self.convert_one(text, voice)?;
            log::debug!("{key} -> {}", entry.audio_url);
            output.push(key.clone(), entry);
        }

        log::info!("Converted {} paragraphs with voice {voice}", output.len());
        Ok(output)
    }

    fn convert_one(&self, text: &str, voice: Voice) -> Result<AudioEntry, TtsError> {
        let filename = generate_filename();
        let local_path = self.temp_dir.join(&filename);
        self.synthesizer.synthesize_to_file(text, voice, &local_path)?;

        let key = format!("{}{}", self.key_prefix, filename);
        let audio_url = self.store.store(&local_path, &key)?;
        fs::remove_file(&local_path)?;

        Ok(AudioEntry {
            text: text.to_string(),
            audio_url,
            voice,
        })
    }
}
