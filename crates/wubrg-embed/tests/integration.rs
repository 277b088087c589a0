use chrono::NaiveDate;
use std::path::PathBuf;
use wubrg_core::{Card, EmojiTable, PlainSymbols};
use wubrg_embed::{
    CardQuery, ColorRatings, Composer, DraftFormat, EmbedConfig, EmbedError, RatingsTable,
    StatField,
};

fn data_file(name: &str) -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let mut path = PathBuf::from(manifest_dir);
    path.push("tests/data");
    path.push(name);
    std::fs::read_to_string(path).expect("fixture readable")
}

fn ratings() -> RatingsTable {
    serde_json::from_str(&data_file("card_ratings.json")).unwrap()
}

fn query(formats: Vec<DraftFormat>, color_filter: Option<&str>) -> CardQuery {
    CardQuery {
        set_code: "ELD".into(),
        formats,
        fields: vec![
            StatField::new("game_count", "# GP"),
            StatField::new("ever_drawn_win_rate", "GIH WR"),
            StatField::new("drawn_improvement_win_rate", "IWD"),
        ],
        start_date: NaiveDate::from_ymd_opt(2019, 10, 3).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2019, 11, 1).unwrap(),
        color_filter: color_filter.map(Into::into),
    }
}

#[test]
fn card_embed_for_adventure_card() {
    let config = EmbedConfig::default();
    let composer = Composer::new(&config).with_symbols(&PlainSymbols);
    let card: Card = serde_json::from_str(&data_file("bonecrusher.json")).unwrap();

    let embed = composer
        .card_embed(
            &card,
            &ratings(),
            &query(
                vec![DraftFormat::PremierDraft, DraftFormat::TradDraft],
                Some("gruul"),
            ),
        )
        .unwrap();

    assert_eq!(embed.title, "Bonecrusher Giant // Stomp {2}{R}{1}{R}");
    assert_eq!(embed.url, "https://www.17lands.com/card_ratings");
    assert_eq!(embed.fields.len(), 3);

    let info = &embed.fields[0];
    assert_eq!(info.name, "Data Info");
    assert!(!info.inline);
    assert_eq!(
        info.value,
        "Date Range:\t\t 2019-10-03 to 2019-11-01\r\nColour filter: \t\t{R}{G}\r\n"
    );

    let formats = &embed.fields[1];
    assert_eq!(formats.name, " - ELD - ");
    assert_eq!(formats.value, "*Bo1*\r\n*Bo3*");
    assert!(formats.inline);

    let table = &embed.fields[2];
    assert_eq!(table.name, "` # GP ` `GIH WR` ` IWD  `");
    assert_eq!(
        table.value,
        "`48213 ` `61.3% ` ` 7.1% `\r\n` 9120 ` `63.1% ` ` 6.5% `"
    );
}

#[test]
fn missing_cost_and_filter_use_placeholders() {
    let config = EmbedConfig::default();
    let composer = Composer::new(&config);
    let mut data = RatingsTable::default();
    for field in ["game_count", "ever_drawn_win_rate", "drawn_improvement_win_rate"] {
        data.insert(DraftFormat::Sealed, "Mystery", field, 1.0);
    }

    let embed = composer
        .card_embed(
            &Card::new("Mystery"),
            &data,
            &query(vec![DraftFormat::Sealed], None),
        )
        .unwrap();

    assert_eq!(embed.title, "Mystery {W}{U}{B}{R}{G}{C}");
    assert!(embed.fields[0].value.contains("Colour filter: \t\t*None*\r\n"));
    assert_eq!(embed.fields[1].value, "*Seal*");
    assert_eq!(embed.fields[2].value, "`  1   ` `  1   ` `  1   `");
}

#[test]
fn null_cells_render_as_dash() {
    let config = EmbedConfig::default();
    let composer = Composer::new(&config);
    let embed = composer
        .card_embed(
            &Card::new("Opt").with_mana_cost("{U}"),
            &ratings(),
            &query(vec![DraftFormat::PremierDraft], Some("U")),
        )
        .unwrap();
    assert_eq!(embed.fields[2].value, "` 1200 ` `54.0% ` `  -   `");
}

#[test]
fn missing_stats_propagate() {
    let config = EmbedConfig::default();
    let composer = Composer::new(&config);
    let err = composer
        .card_embed(
            &Card::new("Opt").with_mana_cost("{U}"),
            &ratings(),
            &query(vec![DraftFormat::PremierDraft, DraftFormat::TradDraft], None),
        )
        .unwrap_err();

    match err {
        EmbedError::MissingStat {
            format,
            card,
            field,
        } => {
            assert_eq!(format, DraftFormat::TradDraft);
            assert_eq!(card, "Opt");
            assert_eq!(field, "game_count");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn emoji_config_flows_into_titles() {
    let config = EmbedConfig::from_toml(
        r#"
        [emoji]
        U = "<:manau:42>"
        "#,
    )
    .unwrap();
    let composer = Composer::new(&config);
    let embed = composer
        .card_embed(
            &Card::new("Opt").with_mana_cost("{U}"),
            &ratings(),
            &query(vec![DraftFormat::PremierDraft], Some("Blue")),
        )
        .unwrap();
    assert_eq!(embed.title, "Opt <:manau:42>");
    assert!(embed.fields[0].value.contains("\t\t<:manau:42>\r\n"));
}

#[test]
fn colour_ratings_from_file() {
    let config = EmbedConfig::default();
    let mut emoji = EmojiTable::default();
    emoji.insert("G", "g");
    emoji.insert("R", "r");
    let composer = Composer::new(&config).with_symbols(&emoji);
    let ratings: ColorRatings = serde_json::from_str(&data_file("color_ratings.json")).unwrap();

    let embed = composer.colour_rating_embed(&ratings);
    let two = &embed.fields[1].value;
    assert!(two.ends_with("rg: `% 57.12`\r\n"));
    assert!(two.contains("{B}g: `% 54.33`\r\n"));
    assert!(embed.fields[2].value.starts_with("{W}{U}r: `% 51.04`\r\n"));
}

#[test]
fn payload_json_shape() {
    let config = EmbedConfig::default();
    let embed = Composer::new(&config).supported_color_strings();
    let json = serde_json::to_value(&embed).unwrap();
    assert_eq!(json["title"], "Available Colour Strings");
    assert_eq!(json["color"], 0xE74C3C);
    assert!(json.get("footer").is_none());
    assert!(json.get("url").is_none());
    assert_eq!(json["fields"][1]["name"], "Guilds");
    assert_eq!(json["fields"][1]["inline"], true);
}
