// src/types.rs

use serde::{Deserialize, Serialize};

/// Outcome of a single scoring rule. Every rule reports, matched or not.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleResult {
    pub id: String,
    pub label: String,
    pub matched: bool,
    pub weight: u8,
    pub points: u8,
}

impl RuleResult {
    pub fn new(id: &str, label: &str, weight: u8, matched: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            matched,
            weight,
            points: if matched { weight } else { 0 },
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Suspicious,
    Dangerous,
}

impl Verdict {
    /// Human-readable status shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe ✅",
            Verdict::Suspicious => "Suspicious ⚠️",
            Verdict::Dangerous => "Dangerous ❌",
        }
    }

    /// Stable tag a client can style or branch on.
    pub fn class(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Dangerous => "dangerous",
        }
    }
}
