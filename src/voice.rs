use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The fixed set of voices offered by the `tts-1-hd` model.
///
/// The lowercase name is sent verbatim as the API `voice` parameter and is
/// what appears in the output document.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Voice {
    Alloy,
    Echo,
    Fable,
    Onyx,
    Nova,
    Shimmer,
}

impl Voice {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// All voices in selector order.
    pub fn all() -> Vec<Voice> {
        Voice::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Voice;
    use std::str::FromStr;

    #[test]
    fn exposes_six_voices_in_selector_order() {
        let names: Vec<String> = Voice::all().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            names,
            vec!["alloy", "echo", "fable", "onyx", "nova", "shimmer"]
        );
    }

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(Voice::from_str("nova").unwrap(), Voice::Nova);
        assert_eq!(Voice::from_str("shimmer").unwrap(), Voice::Shimmer);
        assert!(Voice::from_str("baritone").is_err());
    }

    #[test]
    fn serializes_as_api_name() {
        assert_eq!(serde_json::to_string(&Voice::Onyx).unwrap(), "\"onyx\"");
        assert_eq!(Voice::Fable.as_str(), "fable");
    }
}
