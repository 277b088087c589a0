//! Color aliases, color identity and mana-cost tokenizing.
//!
//! The lenient functions ([`color_string`], [`color_identity`], [`parse_cost`])
//! never fail: they hand back `""` or the `["A"]` placeholder. The `try_*` /
//! [`ManaCost::parse`] forms return a [`CoreError`] instead.

pub mod alias;
pub mod card;
pub mod color;
pub mod error;
pub mod mana;
pub mod render;

pub use alias::{alias, alias_groups, aliases, colour_groupings};
pub use card::{Card, CardFace};
pub use color::{COLOR_ALPHABET, Color, ColorSet, color_identity, color_string, try_color_string};
pub use error::CoreError;
pub use mana::{FALLBACK_SYMBOL, ManaCost, ManaSymbol, is_mana_symbol, parse_cost};
pub use render::{
    EmojiTable, PlainSymbols, SymbolRenderer, render_color_identity, render_letters,
    render_mana_cost,
};
