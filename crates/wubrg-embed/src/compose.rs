//! Embeds for draft-data queries and help replies.

use crate::config::EmbedConfig;
use crate::error::EmbedError;
use crate::format::DraftFormat;
use crate::payload::Embed;
use crate::stats::{ColorRatings, DefaultStatFormatter, RatingsTable, StatField, StatFormatter};
use chrono::NaiveDate;
use wubrg_core::{
    COLOR_ALPHABET, Card, SymbolRenderer, alias_groups, color_identity, colour_groupings,
    render_color_identity, render_letters, render_mana_cost,
};

/// Cell template shared by the header and data rows of the card table.
fn cell(text: &str) -> String {
    format!("`{text:^6}`")
}

/// What a card query covers.
#[derive(Debug, Clone)]
pub struct CardQuery {
    pub set_code: String,
    pub formats: Vec<DraftFormat>,
    pub fields: Vec<StatField>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color_filter: Option<String>,
}

/// Builds embeds using one config, symbol renderer and stat formatter.
pub struct Composer<'a> {
    config: &'a EmbedConfig,
    symbols: &'a dyn SymbolRenderer,
    stats: &'a dyn StatFormatter,
}

impl<'a> Composer<'a> {
    /// Renders symbols through the config's emoji table.
    pub fn new(config: &'a EmbedConfig) -> Self {
        Self {
            config,
            symbols: &config.emoji,
            stats: &DefaultStatFormatter,
        }
    }

    #[must_use]
    pub fn with_symbols(mut self, symbols: &'a dyn SymbolRenderer) -> Self {
        self.symbols = symbols;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: &'a dyn StatFormatter) -> Self {
        self.stats = stats;
        self
    }

    /// Blank embed styled for data queries.
    pub fn data_embed(&self, title: impl Into<String>, description: &str, url: &str) -> Embed {
        Embed::new(title, self.config.data_colour)
            .description(description)
            .url(url)
            .footer(&self.config.footer)
    }

    /// Blank embed styled for help replies.
    pub fn help_embed(&self, title: impl Into<String>, description: &str) -> Embed {
        Embed::new(title, self.config.help_colour).description(description)
    }

    /// Game stats for one card across the queried formats.
    ///
    /// Every (format, card, field) cell must exist in `data`; the first gap
    /// is returned as [`EmbedError::MissingStat`].
    pub fn card_embed(
        &self,
        card: &Card,
        data: &RatingsTable,
        query: &CardQuery,
    ) -> Result<Embed, EmbedError> {
        let cost = match card.mana_cost() {
            Some(cost) => render_mana_cost(self.symbols, cost),
            None => render_letters(self.symbols, COLOR_ALPHABET),
        };
        let mut embed = self.data_embed(
            format!("{} {}", card.name, cost),
            "",
            &self.config.card_ratings_url,
        );

        let date_range = format!(
            "Date Range:\t\t {} to {}\r\n",
            query.start_date, query.end_date
        );
        let mut filter = render_color_identity(
            self.symbols,
            query.color_filter.as_deref().unwrap_or_default(),
        );
        if filter.is_empty() {
            filter = "*None*".to_owned();
        }
        embed.add_field(
            "Data Info",
            format!("{date_range}Colour filter: \t\t{filter}\r\n"),
            false,
        );

        let formats_column = query
            .formats
            .iter()
            .map(|f| format!("*{}*", f.nickname()))
            .collect::<Vec<_>>()
            .join("\r\n");
        embed.add_field(format!(" - {} - ", query.set_code), formats_column, true);

        let header = query
            .fields
            .iter()
            .map(|f| cell(&f.label))
            .collect::<Vec<_>>()
            .join(" ");
        let stats_name = card.stats_name();
        let rows = query
            .formats
            .iter()
            .map(|&format| {
                query
                    .fields
                    .iter()
                    .map(|field| {
                        data.stat(format, stats_name, &field.key)
                            .map(|value| cell(&self.stats.format(value)))
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(|cells| cells.join(" "))
            })
            .collect::<Result<Vec<_>, _>>()?
            .join("\r\n");
        embed.add_field(header, rows, true);

        tracing::debug!(card = %card.name, formats = query.formats.len(), "built card embed");
        Ok(embed)
    }

    /// Win rates per colour pairing, grouped by number of colours. Pairings
    /// without a rating show a `% 00.00` placeholder.
    pub fn colour_rating_embed(&self, ratings: &ColorRatings) -> Embed {
        let mut embed = self.data_embed("Colour Rankings", "", &self.config.color_ratings_url);

        for (group, names) in colour_groupings() {
            let value: String = names
                .iter()
                .map(|name| {
                    let identity = color_identity(name);
                    let rate = match ratings.get(&identity) {
                        Some(win_rate) => format!("`% {:05.2}`", win_rate * 100.0),
                        None => "`% 00.00`".to_owned(),
                    };
                    format!("{}: {rate}\r\n", render_letters(self.symbols, &identity))
                })
                .collect();
            embed.add_field(group, value, true);
        }
        embed
    }

    /// Help reply listing every alias a colour argument accepts.
    pub fn supported_color_strings(&self) -> Embed {
        let mut embed = self.help_embed(
            "Available Colour Strings",
            "Accepted colours are a mix of 'W', 'U', 'B', 'R', 'G', and 'C', or the keywords below.",
        );

        for (group, entries) in alias_groups() {
            let value: String = entries
                .iter()
                .map(|(name, _)| {
                    format!("{} - {name}\r\n", render_color_identity(self.symbols, name))
                })
                .collect();
            embed.add_field(group, value, true);
        }
        embed
    }
}
