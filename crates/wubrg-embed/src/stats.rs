//! Statistics tables the card and colour embeds read from.

use crate::error::EmbedError;
use crate::format::DraftFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use wubrg_core::color_identity;

/// One cell of card data: a count, a rate, a label, or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
    Missing,
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Number(n)
    }
}

/// `format -> card name -> field key -> value`, as fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsTable(pub BTreeMap<DraftFormat, BTreeMap<String, BTreeMap<String, StatValue>>>);

impl RatingsTable {
    pub fn insert(
        &mut self,
        format: DraftFormat,
        card: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<StatValue>,
    ) {
        self.0
            .entry(format)
            .or_default()
            .entry(card.into())
            .or_default()
            .insert(field.into(), value.into());
    }

    pub fn stat(
        &self,
        format: DraftFormat,
        card: &str,
        field: &str,
    ) -> Result<&StatValue, EmbedError> {
        self.0
            .get(&format)
            .and_then(|cards| cards.get(card))
            .and_then(|fields| fields.get(field))
            .ok_or_else(|| EmbedError::MissingStat {
                format,
                card: card.to_owned(),
                field: field.to_owned(),
            })
            .inspect_err(|err| tracing::debug!(%err, "statistics lookup failed"))
    }
}

/// A data column: the key in [`RatingsTable`] and its header label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatField {
    pub key: String,
    pub label: String,
}

impl StatField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// `key=Label`, or a bare `key` that doubles as its label.
impl FromStr for StatField {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, label) = s.split_once('=').unwrap_or((s, s));
        let (key, label) = (key.trim(), label.trim());
        if key.is_empty() || label.is_empty() {
            return Err(EmbedError::InvalidField(s.to_owned()));
        }
        Ok(StatField::new(key, label))
    }
}

/// Win rates keyed by color identity. Keys are normalized on load, so
/// `"Azorius"`, `"uw"` and `"WU"` land on the same entry. Keys with no colors
/// (`"C"`, unknown names) are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>")]
pub struct ColorRatings(BTreeMap<String, f64>);

impl ColorRatings {
    pub fn insert(&mut self, colors: &str, win_rate: f64) {
        let identity = color_identity(colors);
        if identity.is_empty() {
            tracing::warn!(colors, "skipping rating with no color identity");
            return;
        }
        self.0.insert(identity, win_rate);
    }

    pub fn get(&self, colors: &str) -> Option<f64> {
        self.0.get(&color_identity(colors)).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, f64>> for ColorRatings {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut ratings = ColorRatings::default();
        for (colors, win_rate) in raw {
            ratings.insert(&colors, win_rate);
        }
        ratings
    }
}

/// Display text for one statistics cell.
pub trait StatFormatter {
    fn format(&self, value: &StatValue) -> String;
}

/// Whole numbers as integers, fractions as percentages, `-` for gaps.
///
/// The integer rule wins, so `0.0` and `1.0` print as `0` and `1` rather than
/// `0.0%` and `100.0%`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStatFormatter;

impl StatFormatter for DefaultStatFormatter {
    fn format(&self, value: &StatValue) -> String {
        match value {
            StatValue::Missing => "-".to_owned(),
            StatValue::Text(text) => text.clone(),
            StatValue::Number(n) if n.fract() == 0.0 => format!("{n:.0}"),
            StatValue::Number(n) if (-1.0..=1.0).contains(n) => format!("{:.1}%", n * 100.0),
            StatValue::Number(n) => format!("{n:.2}"),
        }
    }
}
