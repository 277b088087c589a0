use crate::alias;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Letters a color string may contain: the five colors plus generic `C`.
pub const COLOR_ALPHABET: &str = "WUBRGC";

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ColorSet: u8 {
        const WHITE = 0b00001;
        const BLUE  = 0b00010;
        const BLACK = 0b00100;
        const RED   = 0b01000;
        const GREEN = 0b10000;
    }
}

impl ColorSet {
    pub fn is_colorless(self) -> bool {
        self.is_empty()
    }

    pub fn is_multicolor(self) -> bool {
        self.bits().count_ones() > 1
    }

    /// Member colors in WUBRG order.
    pub fn colors(self) -> impl Iterator<Item = Color> {
        Color::ALL
            .into_iter()
            .filter(move |c| self.contains(ColorSet::from(*c)))
    }

    /// Resolves an alias or raw letter string and keeps the five colors.
    /// Invalid input yields the empty set.
    #[must_use]
    pub fn from_color_string(s: &str) -> Self {
        color_string(s).chars().filter_map(Color::from_letter).collect()
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        match color {
            Color::W => ColorSet::WHITE,
            Color::U => ColorSet::BLUE,
            Color::B => ColorSet::BLACK,
            Color::R => ColorSet::RED,
            Color::G => ColorSet::GREEN,
        }
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorSet::empty(), |set, c| set | ColorSet::from(c))
    }
}

/// Writes the identity letters in WUBRG order; the empty set writes nothing.
impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.colors().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Pips in a mana cost, in WUBRG order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    W,
    U,
    B,
    R,
    G,
}

impl Color {
    pub const ALL: [Color; 5] = [Color::W, Color::U, Color::B, Color::R, Color::G];

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'W' => Some(Color::W),
            'U' => Some(Color::U),
            'B' => Some(Color::B),
            'R' => Some(Color::R),
            'G' => Some(Color::G),
            _ => None,
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Color::W => 'W',
            Color::U => 'U',
            Color::B => 'B',
            Color::R => 'R',
            Color::G => 'G',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Resolves an alias or a raw letter string to an upper-case color string.
///
/// Letters are kept as written: duplicates and order survive, and `C` is
/// allowed. Any character outside [`COLOR_ALPHABET`] is an error.
pub fn try_color_string(s: &str) -> Result<String, CoreError> {
    let upper = s.to_uppercase();
    let resolved = match alias::alias(&upper) {
        Some(colors) => colors.to_owned(),
        None => upper,
    };
    match resolved.chars().find(|c| !COLOR_ALPHABET.contains(*c)) {
        Some(found) => Err(CoreError::InvalidColor {
            input: resolved,
            found,
        }),
        None => Ok(resolved),
    }
}

/// Like [`try_color_string`], but logs a warning and returns `""` when the
/// input cannot be resolved.
pub fn color_string(s: &str) -> String {
    try_color_string(s).unwrap_or_else(|err| {
        tracing::warn!(%err, "converting invalid color string to \"\"");
        String::new()
    })
}

/// Resolves a color string and re-emits its colors once each in WUBRG order,
/// dropping `C`.
pub fn color_identity(s: &str) -> String {
    ColorSet::from_color_string(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Runs `f` under a plain-text subscriber and returns what it logged.
    fn logged(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let writer = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = out.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn raw_letters_are_uppercased_and_kept_verbatim() {
        assert_eq!(color_string("gwu"), "GWU");
        assert_eq!(color_string("WWC"), "WWC");
        assert_eq!(color_string(""), "");
    }

    #[test]
    fn aliases_resolve_before_validation() {
        assert_eq!(color_string("Azorius"), "WU");
        assert_eq!(color_string("azorius"), "WU");
        assert_eq!(color_string("all"), "WUBRGC");
        assert_eq!(color_string("None"), "");
    }

    #[test]
    fn invalid_characters_yield_empty_string() {
        assert_eq!(color_string("purple"), "");
        assert_eq!(color_string("WUX"), "");
        assert_eq!(color_string("W U"), "");
    }

    #[test]
    fn invalid_input_logs_one_warning() {
        let log = logged(|| assert_eq!(color_string("purple"), ""));
        assert_eq!(log.lines().count(), 1, "{log}");
        assert!(log.contains("WARN"));
        assert!(log.contains("PURPLE"));
    }

    #[test]
    fn valid_input_logs_nothing() {
        let log = logged(|| {
            assert_eq!(color_string("Azorius"), "WU");
            assert_eq!(color_string("None"), "");
            assert_eq!(color_string("rg"), "RG");
        });
        assert_eq!(log, "");
    }

    #[test]
    fn strict_variant_reports_offending_character() {
        let err = try_color_string("wux").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidColor {
                input: "WUX".into(),
                found: 'X'
            }
        );
    }

    #[test]
    fn identity_is_ordered_and_deduplicated() {
        assert_eq!(color_identity("GUW"), "WUG");
        assert_eq!(color_identity("ggrrC"), "RG");
        assert_eq!(color_identity("All"), "WUBRG");
        assert_eq!(color_identity("Riveteers"), "BRG");
        assert_eq!(color_identity("C"), "");
        assert_eq!(color_identity("nope"), "");
    }

    #[test]
    fn color_set_flags() {
        let set = ColorSet::from_color_string("Esper");
        assert_eq!(set, ColorSet::WHITE | ColorSet::BLUE | ColorSet::BLACK);
        assert!(set.is_multicolor());
        assert!(!set.is_colorless());
        assert_eq!(set.colors().collect::<Vec<_>>(), [Color::W, Color::U, Color::B]);
        assert!(ColorSet::from_color_string("C").is_colorless());
    }

    #[test]
    fn single_letter_symbols() {
        assert_eq!(Color::from_symbol("R"), Some(Color::R));
        assert_eq!(Color::from_symbol("RG"), None);
        assert_eq!(Color::from_symbol("C"), None);
        assert_eq!(Color::from_symbol(""), None);
    }
}
