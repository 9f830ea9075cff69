// src/models.rs
use serde::{Deserialize, Serialize};

// Character classes enabled for generation. Any subset is valid, including
// none at all; the generator rejects an empty selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharsetSelection {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl CharsetSelection {
    pub fn is_empty(&self) -> bool {
        !self.include_lowercase
            && !self.include_uppercase
            && !self.include_numbers
            && !self.include_symbols
    }
}

impl Default for CharsetSelection {
    fn default() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

// Strength tiers, ordered by how many character classes the password hits.
// The discriminant doubles as the criteria count (0 through 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    None,
    Weak,
    Medium,
    Good,
    Great,
}

impl StrengthTier {
    pub fn criteria_met(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::None => "",
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Good => "Good",
            StrengthTier::Great => "Great",
        }
    }
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrengthTier::None => "none",
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Good => "good",
            StrengthTier::Great => "great",
        };
        write!(f, "{}", name)
    }
}
