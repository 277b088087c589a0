use crate::error::EmbedError;
use crate::payload::{BLUE, RED};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wubrg_core::EmojiTable;

pub const DEFAULT_FOOTER: &str =
    "Draft data provided by 17Lands.com | Card info provided by Scryfall.com";
pub const CARD_RATINGS_URL: &str = "https://www.17lands.com/card_ratings";
pub const COLOR_RATINGS_URL: &str = "https://www.17lands.com/color_ratings";

/// Embed presentation settings, loaded from TOML. Missing keys keep their
/// defaults.
///
/// ```toml
/// footer = "Data from 17Lands"
///
/// [emoji]
/// W = "<:manaw:100000000000000001>"
/// "2/U" = "<:mana2u:100000000000000002>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub footer: String,
    pub card_ratings_url: String,
    pub color_ratings_url: String,
    pub data_colour: u32,
    pub help_colour: u32,
    pub emoji: EmojiTable,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            footer: DEFAULT_FOOTER.to_owned(),
            card_ratings_url: CARD_RATINGS_URL.to_owned(),
            color_ratings_url: COLOR_RATINGS_URL.to_owned(),
            data_colour: BLUE,
            help_colour: RED,
            emoji: EmojiTable::default(),
        }
    }
}

impl EmbedConfig {
    pub fn from_toml(text: &str) -> Result<Self, EmbedError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, EmbedError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(
            path = %path.display(),
            emoji = config.emoji.0.len(),
            "loaded embed config"
        );
        Ok(config)
    }
}
