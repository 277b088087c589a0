//! Named color combinations: single colors, guilds, colleges, wedges,
//! triomes, shards and families.
//!
//! The tables are static and only reachable through the accessor functions
//! below. Lookups title-case the name first, so `azorius`, `AZORIUS` and
//! `Azorius` all resolve the same way.

use std::collections::HashMap;
use std::sync::LazyLock;

/// An alias name and the color string it stands for.
pub type AliasEntry = (&'static str, &'static str);

const COLORS: &[AliasEntry] = &[
    ("White", "W"),
    ("Blue", "U"),
    ("Black", "B"),
    ("Red", "R"),
    ("Green", "G"),
];

const GUILDS: &[AliasEntry] = &[
    ("Azorius", "WU"),
    ("Orzhov", "WB"),
    ("Boros", "WR"),
    ("Selesnya", "WG"),
    ("Dimir", "UB"),
    ("Izzet", "UR"),
    ("Simic", "UG"),
    ("Rakdos", "BR"),
    ("Golgari", "BG"),
    ("Gruul", "RG"),
];

const COLLEGES: &[AliasEntry] = &[
    ("Silverquill", "WB"),
    ("Lorehold", "WR"),
    ("Prismari", "UR"),
    ("Quandrix", "UG"),
    ("Witherbloom", "BG"),
];

const WEDGES: &[AliasEntry] = &[
    ("Jeskai", "WUR"),
    ("Mardu", "WBR"),
    ("Abzan", "WBG"),
    ("Sultai", "UBG"),
    ("Temur", "URG"),
];

const TRIOMES: &[AliasEntry] = &[
    ("Raugrin", "WUR"),
    ("Savai", "WBR"),
    ("Indatha", "WBG"),
    ("Zagoth", "UBG"),
    ("Ketria", "URG"),
];

const SHARDS: &[AliasEntry] = &[
    ("Esper", "WUB"),
    ("Bant", "WUG"),
    ("Naya", "WRG"),
    ("Grixis", "UBR"),
    ("Jund", "BRG"),
];

const FAMILIES: &[AliasEntry] = &[
    ("Obscura", "WUB"),
    ("Brokers", "WUG"),
    ("Cabaretti", "WRG"),
    ("Maestros", "UBR"),
    ("Riveteers", "BRG"),
];

/// Umbrella names that belong to no display category.
const UMBRELLA: &[AliasEntry] = &[("5-Color", "WUBRG"), ("All", "WUBRGC"), ("None", "")];

const ALIAS_GROUPS: &[(&str, &[AliasEntry])] = &[
    ("Colors", COLORS),
    ("Guilds", GUILDS),
    ("Colleges", COLLEGES),
    ("Wedges", WEDGES),
    ("Triomes", TRIOMES),
    ("Shards", SHARDS),
    ("Families", FAMILIES),
];

const COLOUR_GROUPINGS: &[(&str, &[&str])] = &[
    ("Mono-Color", &["White", "Blue", "Black", "Red", "Green"]),
    (
        "Two-Color",
        &[
            "Azorius", "Orzhov", "Boros", "Selesnya", "Dimir", "Izzet", "Simic", "Rakdos",
            "Golgari", "Gruul",
        ],
    ),
    (
        "Three-Color",
        &[
            "Jeskai", "Mardu", "Abzan", "Sultai", "Temur", "Esper", "Bant", "Naya", "Grixis",
            "Jund",
        ],
    ),
];

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    UMBRELLA
        .iter()
        .chain(ALIAS_GROUPS.iter().flat_map(|(_, entries)| entries.iter()))
        .copied()
        .collect()
});

/// Look up the color string for an alias, ignoring letter case.
#[must_use]
pub fn alias(name: &str) -> Option<&'static str> {
    ALIASES.get(title_case(name).as_str()).copied()
}

/// Every recognized alias, umbrella names included. Order is unspecified.
pub fn aliases() -> impl Iterator<Item = AliasEntry> {
    ALIASES.iter().map(|(k, v)| (*k, *v))
}

/// Alias categories in display order, each with its entries in display order.
pub fn alias_groups() -> impl Iterator<Item = (&'static str, &'static [AliasEntry])> {
    ALIAS_GROUPS.iter().copied()
}

/// Alias names grouped by how many colors they contain.
pub fn colour_groupings() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    COLOUR_GROUPINGS.iter().copied()
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, so `5-color` becomes `5-Color`.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}
