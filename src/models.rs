// src/models.rs - Data model for the specification reconciliation engine

use serde::{Deserialize, Serialize};

/// Tier of a seller-drafted specification, ordered by buyer impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTier {
    Primary,
    Secondary,
    Tertiary,
}

impl SourceTier {
    /// Numeric matching weight. Tertiary is excluded from matching at most
    /// call sites but still carries a weight for completeness.
    pub fn priority(&self) -> u8 {
        match self {
            SourceTier::Primary => 3,
            SourceTier::Secondary => 2,
            SourceTier::Tertiary => 1,
        }
    }

    /// Inverse of [`SourceTier::priority`], clamping anything below 2 to
    /// Tertiary.
    pub fn from_priority(priority: u8) -> Self {
        match priority {
            3.. => SourceTier::Primary,
            2 => SourceTier::Secondary,
            _ => SourceTier::Tertiary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTier::Primary => "Primary",
            SourceTier::Secondary => "Secondary",
            SourceTier::Tertiary => "Tertiary",
        }
    }
}

/// Role of a website-derived ISQ. Config influences price and appears once
/// per extraction run; keys are the most repeated category-defining specs;
/// buyers are supplementary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsqRole {
    Config,
    Key,
    Buyer,
}

impl IsqRole {
    pub fn priority(&self) -> u8 {
        match self {
            IsqRole::Config => 3,
            IsqRole::Key => 2,
            IsqRole::Buyer => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IsqRole::Config => "config",
            IsqRole::Key => "key",
            IsqRole::Buyer => "buyer",
        }
    }
}

/// How a specification is presented to sellers. Descriptive only; never
/// consulted by the matching algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    SingleSelect,
    MultiSelect,
}

impl Default for InputType {
    fn default() -> Self {
        InputType::SingleSelect
    }
}

/// A named attribute of a product category, as drafted by the seller stage.
/// Option order is popularity order and must be preserved in output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub tier: SourceTier,
    #[serde(default)]
    pub input_type: InputType,
}

/// A website-derived specification. Structurally a name plus options; its
/// priority comes from the role it is slotted into in [`WebsiteIsqs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteSpec {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The triple produced by one website ISQ extraction run. Immutable once
/// produced; consumed only by the reconciler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteIsqs {
    #[serde(default)]
    pub config: Option<WebsiteSpec>,
    #[serde(default)]
    pub keys: Vec<WebsiteSpec>,
    #[serde(default)]
    pub buyers: Vec<WebsiteSpec>,
}

/// A reconciliation candidate: one specification from either source,
/// flattened to a name, its options, and a numeric priority in 1..=3.
/// Seller-side priority encodes the tier (see [`SourceTier::from_priority`]);
/// website-side priority encodes the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSpec {
    pub name: String,
    pub options: Vec<String>,
    pub priority: u8,
}

/// The core output entity of reconciliation: one matched cross-source pair.
/// Created fresh on every reconciliation call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSpecPair {
    pub name: String,
    pub category: SourceTier,
    pub combined_priority: u8,
    pub options: Vec<String>,
}

/// Terminal artifact of the pipeline: a buyer-facing search question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerIsq {
    pub name: String,
    pub options: Vec<String>,
}

/// Verdict of the external audit stage for one drafted specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Correct,
    Incorrect,
}

/// One audit finding, keyed by free-text specification name. Matched back
/// to drafted specifications by name similarity for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub specification: String,
    pub status: AuditStatus,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub problematic_options: Vec<String>,
}
