use anyhow::{Result, anyhow};
use isolang::Language as IsoLanguage;
use serde::{Deserialize, Serialize};

/// Language utilities for the fixed subtitle language menu
///
/// The UI and the pipeline always work on the stable two-letter code;
/// the label is only used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ml")]
    Malayalam,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Menu order
    pub const ALL: [Language; 5] = [
        Language::Malayalam,
        Language::Tamil,
        Language::Telugu,
        Language::Hindi,
        Language::English,
    ];

    /// ISO 639-1 code, as understood by the transcript and translation services
    pub fn code(&self) -> &'static str {
        match self {
            Self::Malayalam => "ml",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Hindi => "hi",
            Self::English => "en",
        }
    }

    /// Display label such as `Malayalam (ml)`
    pub fn label(&self) -> String {
        let name = get_language_name(self.code()).unwrap_or_else(|_| self.code().to_uppercase());
        format!("{} ({})", name, self.code())
    }

    /// Look up a menu entry by code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == normalized)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| {
            let supported: Vec<&str> = Self::ALL.iter().map(|l| l.code()).collect();
            anyhow!("Unsupported language code: {} (supported: {})", s, supported.join(", "))
        })
    }
}

/// Get the English language name from an ISO 639-1 code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();
    let lang = IsoLanguage::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))?;

    Ok(lang.to_name().to_string())
}
