//! Turning symbol tokens into chat text.

use crate::color::color_identity;
use crate::mana::parse_cost;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Renders one brace-less symbol token (`W`, `2/U`, `10`, ...) for display.
pub trait SymbolRenderer {
    fn render(&self, symbol: &str) -> String;
}

/// Renders a symbol in brace notation: `W` becomes `{W}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainSymbols;

impl SymbolRenderer for PlainSymbols {
    fn render(&self, symbol: &str) -> String {
        format!("{{{symbol}}}")
    }
}

/// Symbol to custom-emoji mapping, e.g. `W` to `<:manaw:1234>`.
/// Unmapped symbols render as [`PlainSymbols`] does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiTable(pub BTreeMap<String, String>);

impl EmojiTable {
    pub fn insert(&mut self, symbol: impl Into<String>, emoji: impl Into<String>) {
        self.0.insert(symbol.into(), emoji.into());
    }
}

impl SymbolRenderer for EmojiTable {
    fn render(&self, symbol: &str) -> String {
        match self.0.get(symbol) {
            Some(emoji) => emoji.clone(),
            None => PlainSymbols.render(symbol),
        }
    }
}

/// Renders each token of a brace-notation cost. Malformed costs render the
/// placeholder `A` symbol.
pub fn render_mana_cost(renderer: &dyn SymbolRenderer, mana_cost: &str) -> String {
    parse_cost(mana_cost)
        .iter()
        .map(|token| renderer.render(token))
        .collect()
}

/// Renders every character of `letters` as its own symbol.
pub fn render_letters(renderer: &dyn SymbolRenderer, letters: &str) -> String {
    let mut buf = [0u8; 4];
    letters
        .chars()
        .map(|c| renderer.render(c.encode_utf8(&mut buf)))
        .collect()
}

/// Renders the identity of an alias or color string, `""` when it has none.
pub fn render_color_identity(renderer: &dyn SymbolRenderer, colors: &str) -> String {
    render_letters(renderer, &color_identity(colors))
}
