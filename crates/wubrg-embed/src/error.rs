use crate::format::DraftFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("No {field:?} stat for {card:?} in {format}")]
    MissingStat {
        format: DraftFormat,
        card: String,
        field: String,
    },
    #[error("Unknown draft format: {0}")]
    UnknownFormat(String),
    #[error("Invalid stat field {0:?}, expected key or key=Label")]
    InvalidField(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
