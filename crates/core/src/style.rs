//! The fixed set of selectable tattoo styles for the booking wizard.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A tattoo style a client can pick in step 2 of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TattooStyle {
    Realistic,
    Traditional,
    Minimalist,
    Geometric,
    Watercolor,
    Blackwork,
    Other,
}

impl TattooStyle {
    /// Presentation order; `Other` ("I have another idea") comes last.
    pub const ALL: [TattooStyle; 7] = [
        Self::Realistic,
        Self::Traditional,
        Self::Minimalist,
        Self::Geometric,
        Self::Watercolor,
        Self::Blackwork,
        Self::Other,
    ];

    /// The wire id the frontend sends (`realistic`, `blackwork`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Traditional => "traditional",
            Self::Minimalist => "minimalist",
            Self::Geometric => "geometric",
            Self::Watercolor => "watercolor",
            Self::Blackwork => "blackwork",
            Self::Other => "other",
        }
    }

    /// Dictionary key for the localized style name.
    pub fn dictionary_key(self) -> String {
        format!("styles.{}", self.as_str())
    }
}

impl std::fmt::Display for TattooStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TattooStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "realistic" => Ok(Self::Realistic),
            "traditional" => Ok(Self::Traditional),
            "minimalist" => Ok(Self::Minimalist),
            "geometric" => Ok(Self::Geometric),
            "watercolor" => Ok(Self::Watercolor),
            "blackwork" => Ok(Self::Blackwork),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::Validation(format!(
                "Unknown tattoo style '{s}'. Must be one of: realistic, traditional, \
                 minimalist, geometric, watercolor, blackwork, other"
            ))),
        }
    }
}
