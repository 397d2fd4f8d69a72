//! CLI definitions for wcgen
//!
//! The clap structure lives in the library so xtask can render man pages and
//! markdown from it.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::settings::RawOptions;

/// Build clap styles.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string: plain for release builds, with the git hash otherwise.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("VERGEN_GIT_SHA"));

#[derive(Parser)]
#[command(name = "wcgen")]
#[command(about = "[ Word Cloud Generator ] - turn text, files and web pages into word clouds")]
#[command(
    long_about = "Word Cloud Generator (wcgen) - client for a word cloud rendering backend.

wcgen gathers text (typed, from a file, or from a URL), validates the
generation options, sends one request to the backend and lets you explore
the result: ranked word frequencies, per-word context, sentiment, and
image/CSV export.

QUICK START:
    wcgen generate --text \"...\"             Generate from text
    wcgen generate --file report.pdf --save   Generate from a file and save the PNG
    wcgen show 42                             Open a saved word cloud by id
    wcgen dashboard                           Show usage statistics

The backend location is read from ~/.config/wcgen/config.toml ([api].base_url)."
)]
#[command(version = VERSION, styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Backend base URL, overriding [api].base_url
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new word cloud
    #[command(long_about = "Generate a new word cloud from exactly one source.

Text must be at least 10 characters after trimming. URLs must start with
http:// or https://. Invalid input is rejected before any request is sent.

EXAMPLES:
    wcgen generate --text \"the quick brown fox jumps over the lazy dog\"
    cat notes.txt | wcgen generate --text -
    wcgen generate --url https://example.com/article --colors plasma
    wcgen generate --file essay.docx --mask heart --save --copy")]
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        options: OptionArgs,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a saved word cloud by id
    #[command(long_about = "Load a saved word cloud (permalink) read-only and display it.

EXAMPLES:
    wcgen show 42
    wcgen show 42 --top 50 --save")]
    Show {
        /// Word cloud identifier
        id: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show frequency and context of one word in a saved word cloud
    #[command(long_about = "Look up how often a word occurs in a saved word cloud and
the sentences it appeared in.

EXAMPLE:
    wcgen lookup 42 fox")]
    Lookup {
        /// Word cloud identifier
        id: String,
        /// Word to look up
        word: String,
    },

    /// Export a saved word cloud as PNG or CSV
    #[command(long_about = "Export a saved word cloud.

PNG writes the rendered image. CSV writes every word with its frequency,
most frequent first.

EXAMPLES:
    wcgen export 42 --format png
    wcgen export 42 --format csv --output words.csv")]
    Export {
        /// Word cloud identifier
        id: String,
        #[arg(long, short, value_enum, default_value_t = ExportFormat::Png)]
        format: ExportFormat,
        /// Output file (default: export directory, wordcloud_<id>.<ext>)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Show usage statistics
    #[command(long_about = "Fetch usage statistics once and print them.

With --follow, live updates are then read from standard input as
newline-delimited JSON events and each one replaces the statistics shown:
    {\"event\": \"dashboard_update\", \"data\": {\"statistics\": {...}}}")]
    Dashboard {
        /// Keep reading live updates from stdin
        #[arg(long)]
        follow: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Exactly one text source.
#[derive(Args, Debug, Clone, Default)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Text to visualize ("-" reads standard input)
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
    /// File to extract text from (txt, pdf, docx, doc, csv, xlsx, xls, html)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Web page to extract text from
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

/// Generation options. Anything left unset falls back to the config
/// file's [generation.defaults], then to built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Keep common stopwords
    #[arg(long)]
    pub keep_stopwords: bool,
    /// Extra stopwords, comma separated
    #[arg(long, value_name = "LIST")]
    pub stopwords: Option<String>,
    /// Mask shape (none, circle, diamond, star, triangle, cloud, heart)
    #[arg(long, value_name = "SHAPE")]
    pub mask: Option<String>,
    /// Minimum word frequency (empty for no bound)
    #[arg(long, value_name = "N")]
    pub min_frequency: Option<String>,
    /// Maximum word frequency (empty for no bound)
    #[arg(long, value_name = "N")]
    pub max_frequency: Option<String>,
    /// Color scheme name, or "custom" with --custom-colors
    #[arg(long, value_name = "NAME")]
    pub colors: Option<String>,
    /// Custom palette, comma separated hex colors
    #[arg(long, value_name = "LIST")]
    pub custom_colors: Option<String>,
    /// Background color name, or "custom" with --custom-background
    #[arg(long, value_name = "NAME")]
    pub background: Option<String>,
    /// Custom background hex color
    #[arg(long, value_name = "HEX")]
    pub custom_background: Option<String>,
    /// Font family
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,
    /// Image width in pixels (100-3000)
    #[arg(long, value_name = "PX")]
    pub width: Option<String>,
    /// Image height in pixels (100-3000)
    #[arg(long, value_name = "PX")]
    pub height: Option<String>,
    /// Maximum number of words (10-1000)
    #[arg(long, value_name = "N")]
    pub max_words: Option<String>,
    /// Smallest font size (1-100)
    #[arg(long, value_name = "PT")]
    pub min_font_size: Option<String>,
    /// Largest font size (10-300)
    #[arg(long, value_name = "PT")]
    pub max_font_size: Option<String>,
    /// How strongly frequency affects size (0.0-1.0)
    #[arg(long, value_name = "F")]
    pub relative_scaling: Option<String>,
    /// Share of horizontally placed words (0.0-1.0)
    #[arg(long, value_name = "F")]
    pub prefer_horizontal: Option<String>,
    /// Title stored with the word cloud
    #[arg(long)]
    pub title: Option<String>,
    /// Tags stored with the word cloud, comma separated
    #[arg(long, value_name = "LIST")]
    pub tags: Option<String>,
}

impl OptionArgs {
    /// The flags as raw option values; unset flags stay absent.
    pub fn to_raw(&self) -> RawOptions {
        RawOptions {
            remove_stopwords: self.keep_stopwords.then_some(false),
            custom_stopwords: self.stopwords.clone(),
            mask_shape: self.mask.clone(),
            min_frequency: self.min_frequency.clone(),
            max_frequency: self.max_frequency.clone(),
            color_scheme: self.colors.clone(),
            custom_colors: self.custom_colors.clone(),
            background_color: self.background.clone(),
            custom_background_color: self.custom_background.clone(),
            font_family: self.font.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
            max_words: self.max_words.clone(),
            min_font_size: self.min_font_size.clone(),
            max_font_size: self.max_font_size.clone(),
            relative_scaling: self.relative_scaling.clone(),
            prefer_horizontal: self.prefer_horizontal.clone(),
        }
    }
}

/// What to do with a displayed word cloud.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Save the image to the export directory
    #[arg(long)]
    pub save: bool,
    /// Copy the image to the clipboard
    #[arg(long)]
    pub copy: bool,
    /// Number of ranked words to print
    #[arg(long, default_value_t = crate::presenter::DEFAULT_RANK_LIMIT)]
    pub top: usize,
    /// Print the artifact summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Csv,
}

impl ExportFormat {
    /// File extension for this export format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    #[command(long_about = "Write the default configuration to the config file.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    wcgen config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
