use crate::error::EmbedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event types the ratings data is split by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DraftFormat {
    PremierDraft,
    TradDraft,
    QuickDraft,
    Sealed,
    TradSealed,
    DraftChallenge,
}

impl DraftFormat {
    pub const ALL: [DraftFormat; 6] = [
        DraftFormat::PremierDraft,
        DraftFormat::TradDraft,
        DraftFormat::QuickDraft,
        DraftFormat::Sealed,
        DraftFormat::TradSealed,
        DraftFormat::DraftChallenge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DraftFormat::PremierDraft => "PremierDraft",
            DraftFormat::TradDraft => "TradDraft",
            DraftFormat::QuickDraft => "QuickDraft",
            DraftFormat::Sealed => "Sealed",
            DraftFormat::TradSealed => "TradSealed",
            DraftFormat::DraftChallenge => "DraftChallenge",
        }
    }

    /// Short column label.
    pub fn nickname(self) -> &'static str {
        match self {
            DraftFormat::PremierDraft => "Bo1",
            DraftFormat::TradDraft => "Bo3",
            DraftFormat::QuickDraft => "Quick",
            DraftFormat::Sealed => "Seal",
            DraftFormat::TradSealed => "Bo3Seal",
            DraftFormat::DraftChallenge => "Chal.",
        }
    }
}

impl fmt::Display for DraftFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftFormat {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EmbedError::UnknownFormat(s.to_owned()))
    }
}
