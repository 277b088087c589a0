use crate::color::{Color, ColorSet};
use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Returned by [`parse_cost`] when a cost cannot be tokenized.
pub const FALLBACK_SYMBOL: &str = "A";

const BASE_SYMBOLS: &[&str] = &["W", "U", "B", "R", "G", "C"];
const NUMERIC_SYMBOLS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20",
];
const HYBRID_SYMBOLS: &[&str] = &[
    "W/U", "W/B", "B/R", "B/G", "U/B", "U/R", "R/G", "R/W", "G/W", "G/U",
];
const PHYREXIAN_SYMBOLS: &[&str] = &["W/P", "U/P", "B/P", "R/P", "G/P"];
const HYBRID_PHYREXIAN_SYMBOLS: &[&str] = &[
    "B/G/P", "B/R/P", "G/U/P", "G/W/P", "R/G/P", "R/W/P", "U/B/P", "U/R/P", "W/B/P", "W/U/P",
];
const COLORLESS_HYBRID_SYMBOLS: &[&str] = &["2/W", "2/U", "2/B", "2/R", "2/G"];
const SPECIAL_SYMBOLS: &[&str] = &["A", "X", "Y", "Z", "S"];
const COST_SYMBOLS: &[&str] = &["T", "Q", "E"];

static MANA_SYMBOLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        BASE_SYMBOLS,
        NUMERIC_SYMBOLS,
        HYBRID_SYMBOLS,
        PHYREXIAN_SYMBOLS,
        HYBRID_PHYREXIAN_SYMBOLS,
        COLORLESS_HYBRID_SYMBOLS,
        SPECIAL_SYMBOLS,
        COST_SYMBOLS,
    ]
    .concat()
    .into_iter()
    .collect()
});

static BRACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("brace pattern is valid"));

/// Whether `token` (without braces) is an accepted symbol. Case-sensitive.
pub fn is_mana_symbol(token: &str) -> bool {
    MANA_SYMBOLS.contains(token)
}

/// A single symbol: {W}, {2/U}, {X}, {T}, {C}, {W/U/P}, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ManaSymbol {
    Colored(Color),
    Generic(u32),
    Colorless,      // C
    Variable(char), // X, Y, Z
    Snow,           // S
    Any,            // A
    Hybrid(Color, Color),
    TwoBrid(Color),   // {2/W}
    Phyrexian(Color), // {W/P}
    HybridPhyrexian(Color, Color),
    Tap,    // {T}
    Untap,  // {Q}
    Energy, // {E}
}

impl ManaSymbol {
    /// Classifies a brace-less token. Only tokens in the accepted vocabulary
    /// classify, so `{U/W}` or `{21}` are rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        if !is_mana_symbol(token) {
            return None;
        }
        let parts: SmallVec<[&str; 3]> = token.split('/').collect();
        let symbol = match parts.as_slice() {
            ["C"] => Self::Colorless,
            ["S"] => Self::Snow,
            ["A"] => Self::Any,
            ["T"] => Self::Tap,
            ["Q"] => Self::Untap,
            ["E"] => Self::Energy,
            [v @ ("X" | "Y" | "Z")] => Self::Variable(v.chars().next()?),
            [single] => match Color::from_symbol(single) {
                Some(c) => Self::Colored(c),
                None => Self::Generic(single.parse().ok()?),
            },
            ["2", c] => Self::TwoBrid(Color::from_symbol(c)?),
            [c, "P"] => Self::Phyrexian(Color::from_symbol(c)?),
            [a, b] => Self::Hybrid(Color::from_symbol(a)?, Color::from_symbol(b)?),
            [a, b, "P"] => {
                Self::HybridPhyrexian(Color::from_symbol(a)?, Color::from_symbol(b)?)
            }
            _ => return None,
        };
        Some(symbol)
    }

    /// Contribution to mana value.
    pub fn mana_value(&self) -> u32 {
        match self {
            Self::Generic(n) => *n,
            Self::TwoBrid(_) => 2,
            Self::Colored(_)
            | Self::Colorless
            | Self::Snow
            | Self::Hybrid(..)
            | Self::Phyrexian(_)
            | Self::HybridPhyrexian(..) => 1,
            Self::Variable(_) | Self::Any | Self::Tap | Self::Untap | Self::Energy => 0,
        }
    }

    pub fn colors(&self) -> ColorSet {
        match self {
            Self::Colored(c) | Self::TwoBrid(c) | Self::Phyrexian(c) => ColorSet::from(*c),
            Self::Hybrid(a, b) | Self::HybridPhyrexian(a, b) => {
                ColorSet::from(*a) | ColorSet::from(*b)
            }
            _ => ColorSet::empty(),
        }
    }
}

/// Writes the token as it appears between braces.
impl fmt::Display for ManaSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colored(c) => write!(f, "{c}"),
            Self::Generic(n) => write!(f, "{n}"),
            Self::Colorless => f.write_str("C"),
            Self::Variable(v) => write!(f, "{v}"),
            Self::Snow => f.write_str("S"),
            Self::Any => f.write_str("A"),
            Self::Hybrid(a, b) => write!(f, "{a}/{b}"),
            Self::TwoBrid(c) => write!(f, "2/{c}"),
            Self::Phyrexian(c) => write!(f, "{c}/P"),
            Self::HybridPhyrexian(a, b) => write!(f, "{a}/{b}/P"),
            Self::Tap => f.write_str("T"),
            Self::Untap => f.write_str("Q"),
            Self::Energy => f.write_str("E"),
        }
    }
}

/// Mana cost as ordered sequence of symbols.
/// Use SmallVec<[_; 8]>: typical spell costs fit on stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ManaCost(pub SmallVec<[ManaSymbol; 8]>);

impl ManaCost {
    pub fn symbols(&self) -> &[ManaSymbol] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cmc(&self) -> f32 {
        self.0.iter().map(ManaSymbol::mana_value).sum::<u32>() as f32
    }

    pub fn color_identity(&self) -> ColorSet {
        self.0
            .iter()
            .fold(ColorSet::empty(), |set, s| set | s.colors())
    }

    /// Strict parse. `""` is the empty cost; unbalanced braces or an unknown
    /// token are errors.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        tokenize(s)?
            .into_iter()
            .map(|token| {
                ManaSymbol::from_token(token).ok_or_else(|| CoreError::UnknownSymbol(token.into()))
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }
}

impl FromStr for ManaCost {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ManaCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|s| write!(f, "{{{s}}}"))
    }
}

/// Splits `{10}{G}{G}` into `["10", "G", "G"]`.
///
/// Brace counts must match and every `{...}` body (shortest match) must be in
/// the vocabulary. Text outside braces is ignored.
fn tokenize(s: &str) -> Result<Vec<&str>, CoreError> {
    let open = s.matches('{').count();
    let close = s.matches('}').count();
    if open != close {
        return Err(CoreError::UnbalancedBraces { open, close });
    }

    let tokens: Vec<&str> = BRACED
        .captures_iter(s)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    if let Some(bad) = tokens.iter().find(|t| !is_mana_symbol(t)) {
        return Err(CoreError::UnknownSymbol((*bad).to_owned()));
    }
    Ok(tokens)
}

/// Tokenizes a cost into its symbols as written.
///
/// Malformed costs collapse to `["A"]`, the "any cost" placeholder. An input
/// with no braces at all, including `""`, gives an empty list.
pub fn parse_cost(mana_cost: &str) -> Vec<String> {
    match tokenize(mana_cost) {
        Ok(tokens) => tokens.into_iter().map(str::to_owned).collect(),
        Err(err) => {
            tracing::debug!(%err, mana_cost, "using placeholder cost");
            vec![FALLBACK_SYMBOL.to_owned()]
        }
    }
}
