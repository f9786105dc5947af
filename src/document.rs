//! Input and output documents.
//!
//! The input is a flat JSON object mapping paragraph keys to text. The
//! output maps each entry to its audio record in one of two shapes:
//!
//! | Mode | Output key | Record |
//! |---|---|---|
//! | `keyed` | input key | `{"text", "audio_url", "voice"}` |
//! | `slides` | `slide{n}` | `{"s{n}paragraph1", "audio_url{n}", "voice"}` |
//!
//! In `slides` mode `n` starts at [`FIRST_SLIDE_NUMBER`] and follows
//! document order; the input key is discarded.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TtsError;
use crate::voice::Voice;

/// Slide number assigned to the first entry in `slides` mode.
pub const FIRST_SLIDE_NUMBER: usize = 2;

/// Paragraph key to text, in document order.
pub type Paragraphs = IndexMap<String, String>;

/// Parse an input document.
pub fn parse_paragraphs(raw: &str) -> Result<Paragraphs, TtsError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse an input document from disk.
pub fn load_paragraphs(path: &Path) -> Result<Paragraphs, TtsError> {
    let raw = fs::read_to_string(path)?;
    parse_paragraphs(&raw)
}

/// How output entries are keyed and shaped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Output keys equal input keys.
    #[default]
    Keyed,
    /// Entries renumbered as `slideN` with per-slide field names.
    Slides,
}

/// The result of converting one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioEntry {
    pub text: String,
    pub audio_url: String,
    pub voice: Voice,
}

/// Accumulated conversion results, serialized according to its [`OutputMode`].
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    mode: OutputMode,
    entries: Vec<(String, AudioEntry)>,
}

impl OutputDocument {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, key: String, entry: AudioEntry) {
        self.entries.push((key, entry));
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Entries in processing order, keyed by their input key.
    pub fn entries(&self) -> &[(String, AudioEntry)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Output keys and values in their final shape.
    pub fn shaped(&self) -> Vec<(String, Value)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, (key, entry))| {
                let voice = Value::String(entry.voice.to_string());
                let mut record = Map::new();
                match self.mode {
                    OutputMode::Keyed => {
                        record.insert("text".into(), entry.text.clone().into());
                        record.insert("audio_url".into(), entry.audio_url.clone().into());
                        record.insert("voice".into(), voice);
                        (key.clone(), Value::Object(record))
                    }
                    OutputMode::Slides => {
                        let n = idx + FIRST_SLIDE_NUMBER;
                        record.insert(format!("s{n}paragraph1"), entry.text.clone().into());
                        record.insert(format!("audio_url{n}"), entry.audio_url.clone().into());
                        record.insert("voice".into(), voice);
                        (format!("slide{n}"), Value::Object(record))
                    }
                }
            })
            .collect()
    }

    /// Pretty-printed JSON with two-space indentation and unescaped non-ASCII text.
    pub fn to_json_pretty(&self) -> Result<String, TtsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<(), TtsError> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shaped = self.shaped();
        let mut map = serializer.serialize_map(Some(shaped.len()))?;
        for (key, value) in &shaped {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
