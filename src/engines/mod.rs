//! Speech synthesis engines.
//!
//! This module contains implementations of [`SpeechSynthesizer`](crate::SpeechSynthesizer).
//!
//! # Available Engines
//!
//! Enable engines via Cargo features:
//! - `azure` - Azure OpenAI `tts-1-hd` over HTTPS (default)

#[cfg(feature = "azure")]
pub mod azure;
