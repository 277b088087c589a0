use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid color string provided: {input} (unexpected {found:?})")]
    InvalidColor { input: String, found: char },
    #[error("Unbalanced mana cost: {open} '{{' against {close} '}}'")]
    UnbalancedBraces { open: usize, close: usize },
    #[error("Unknown mana symbol: {{{0}}}")]
    UnknownSymbol(String),
}
