//! Object stores for synthesized audio.
//!
//! Enable stores via Cargo features:
//! - `s3` - Amazon S3 with static credentials (default)

#[cfg(feature = "s3")]
pub mod s3;

/// Public playback URL of an uploaded object: `base` and `key` joined verbatim.
pub fn cdn_url(base: &str, key: &str) -> String {
    format!("{base}{key}")
}
