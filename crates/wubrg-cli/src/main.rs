use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use wubrg_core::{Card, color_identity, parse_cost, try_color_string};
use wubrg_embed::{
    CardQuery, ColorRatings, Composer, DraftFormat, EmbedConfig, RatingsTable, StatField,
};

#[derive(Parser)]
#[command(name = "wubrg", version, about, long_about = None)]
struct Cli {
    /// Embed settings (footer, links, emoji table) as TOML
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an alias or letter string to a color string
    Color {
        /// e.g. `Azorius`, `5-color`, `gwu`
        colors: String,
    },
    /// Resolve an alias or letter string to a WUBRG-ordered color identity
    Identity { colors: String },
    /// Split a mana cost such as `{10}{G}{G}` into its symbols
    Cost { mana_cost: String },
    /// Print the help embed listing every accepted colour string
    Colors,
    /// Print the colour rankings embed
    Ratings {
        /// JSON object of color identity to win rate
        #[arg(long)]
        ratings: Option<PathBuf>,
    },
    /// Print the stats embed for one card
    Card {
        /// Card record JSON
        #[arg(long)]
        card: PathBuf,

        /// Ratings JSON keyed by format, card name and field
        #[arg(long)]
        data: PathBuf,

        #[arg(long = "set")]
        set_code: String,

        /// Draft format, repeatable (PremierDraft, TradDraft, ...)
        #[arg(long = "format", required = true)]
        formats: Vec<DraftFormat>,

        /// Column as `key=Label`, repeatable
        #[arg(long = "field", required = true)]
        fields: Vec<StatField>,

        #[arg(long)]
        start: NaiveDate,

        #[arg(long)]
        end: NaiveDate,

        /// Colour filter alias or letters
        #[arg(long)]
        filter: Option<String>,
    },
    /// Print the effective embed config as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the JSON/TOML output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EmbedConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EmbedConfig::default(),
    };
    let composer = Composer::new(&config);

    match cli.command {
        Commands::Color { colors } => {
            println!("{}", try_color_string(&colors)?);
        }
        Commands::Identity { colors } => {
            println!("{}", color_identity(&colors));
        }
        Commands::Cost { mana_cost } => print_json(&parse_cost(&mana_cost))?,
        Commands::Colors => print_json(&composer.supported_color_strings())?,
        Commands::Ratings { ratings } => {
            let ratings: ColorRatings = match ratings {
                Some(path) => read_json(&path)?,
                None => ColorRatings::default(),
            };
            print_json(&composer.colour_rating_embed(&ratings))?;
        }
        Commands::Card {
            card,
            data,
            set_code,
            formats,
            fields,
            start,
            end,
            filter,
        } => {
            let card: Card = read_json(&card)?;
            let data: RatingsTable = read_json(&data)?;
            let query = CardQuery {
                set_code,
                formats,
                fields,
                start_date: start,
                end_date: end,
                color_filter: filter,
            };
            print_json(&composer.card_embed(&card, &data, &query)?)?;
        }
        Commands::Config => print!("{}", toml::to_string(&config)?),
    }

    Ok(())
}

/// `RUST_LOG` when set, otherwise warnings and above.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
