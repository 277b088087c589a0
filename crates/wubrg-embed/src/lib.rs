pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod payload;
pub mod stats;

pub use compose::{CardQuery, Composer};
pub use config::EmbedConfig;
pub use error::EmbedError;
pub use format::DraftFormat;
pub use payload::{Embed, EmbedField, EmbedFooter};
pub use stats::{
    ColorRatings, DefaultStatFormatter, RatingsTable, StatField, StatFormatter, StatValue,
};
