//! Raw and normalized generation settings

use serde::{Deserialize, Serialize};

use super::options::{BackgroundPreset, ColorPalette, FontFamily, MaskShape};

/// Inclusive bounds for a numeric setting.
pub type Bounds<T> = (T, T);

pub const FREQUENCY_BOUNDS: Bounds<u32> = (1, u32::MAX);
pub const WIDTH_BOUNDS: Bounds<u32> = (100, 3000);
pub const HEIGHT_BOUNDS: Bounds<u32> = (100, 3000);
pub const MAX_WORDS_BOUNDS: Bounds<u32> = (10, 1000);
pub const MIN_FONT_SIZE_BOUNDS: Bounds<u32> = (1, 100);
pub const MAX_FONT_SIZE_BOUNDS: Bounds<u32> = (10, 300);
pub const UNIT_BOUNDS: Bounds<f64> = (0.0, 1.0);

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_WORDS: u32 = 200;
pub const DEFAULT_MIN_FONT_SIZE: u32 = 10;
pub const DEFAULT_MAX_FONT_SIZE: u32 = 100;
pub const DEFAULT_RELATIVE_SCALING: f64 = 0.5;
pub const DEFAULT_PREFER_HORIZONTAL: f64 = 0.7;

/// Option values as they arrive from a form, CLI flags or a config file.
///
/// Everything is a string (or absent) at this stage; [`normalize`](super::normalize)
/// turns it into [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    pub remove_stopwords: Option<bool>,
    /// Comma-separated list
    pub custom_stopwords: Option<String>,
    pub mask_shape: Option<String>,
    pub min_frequency: Option<String>,
    pub max_frequency: Option<String>,
    pub color_scheme: Option<String>,
    /// Comma-separated hex list, used when `color_scheme == "custom"`
    #[serde(alias = "customColors")]
    pub custom_colors: Option<String>,
    pub background_color: Option<String>,
    /// Picked hex value, used when `background_color == "custom"`
    #[serde(alias = "customBackgroundColor")]
    pub custom_background_color: Option<String>,
    pub font_family: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub max_words: Option<String>,
    pub min_font_size: Option<String>,
    pub max_font_size: Option<String>,
    pub relative_scaling: Option<String>,
    pub prefer_horizontal: Option<String>,
}

impl RawOptions {
    /// Layer `top` over `self`: any field present in `top` wins.
    pub fn overlay(&self, top: &RawOptions) -> RawOptions {
        fn pick<T: Clone>(base: &Option<T>, top: &Option<T>) -> Option<T> {
            top.clone().or_else(|| base.clone())
        }

        RawOptions {
            remove_stopwords: pick(&self.remove_stopwords, &top.remove_stopwords),
            custom_stopwords: pick(&self.custom_stopwords, &top.custom_stopwords),
            mask_shape: pick(&self.mask_shape, &top.mask_shape),
            min_frequency: pick(&self.min_frequency, &top.min_frequency),
            max_frequency: pick(&self.max_frequency, &top.max_frequency),
            color_scheme: pick(&self.color_scheme, &top.color_scheme),
            custom_colors: pick(&self.custom_colors, &top.custom_colors),
            background_color: pick(&self.background_color, &top.background_color),
            custom_background_color: pick(
                &self.custom_background_color,
                &top.custom_background_color,
            ),
            font_family: pick(&self.font_family, &top.font_family),
            width: pick(&self.width, &top.width),
            height: pick(&self.height, &top.height),
            max_words: pick(&self.max_words, &top.max_words),
            min_font_size: pick(&self.min_font_size, &top.min_font_size),
            max_font_size: pick(&self.max_font_size, &top.max_font_size),
            relative_scaling: pick(&self.relative_scaling, &top.relative_scaling),
            prefer_horizontal: pick(&self.prefer_horizontal, &top.prefer_horizontal),
        }
    }
}

/// Word coloring: a named palette or an explicit hex list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorScheme {
    Palette(ColorPalette),
    Custom(Vec<String>),
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Palette(ColorPalette::Viridis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BackgroundColor {
    Preset(BackgroundPreset),
    Hex(String),
}

impl Default for BackgroundColor {
    fn default() -> Self {
        BackgroundColor::Preset(BackgroundPreset::White)
    }
}

/// Validated settings sent with a generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub remove_stopwords: bool,
    pub custom_stopwords: Vec<String>,
    pub mask_shape: MaskShape,
    /// `None` means no lower bound
    pub min_frequency: Option<u32>,
    /// `None` means no upper bound
    pub max_frequency: Option<u32>,
    pub color_scheme: ColorScheme,
    pub background_color: BackgroundColor,
    pub font_family: FontFamily,
    pub width: u32,
    pub height: u32,
    pub max_words: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub relative_scaling: f64,
    pub prefer_horizontal: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            custom_stopwords: Vec::new(),
            mask_shape: MaskShape::None,
            min_frequency: None,
            max_frequency: None,
            color_scheme: ColorScheme::default(),
            background_color: BackgroundColor::default(),
            font_family: FontFamily::Arial,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_words: DEFAULT_MAX_WORDS,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: DEFAULT_MAX_FONT_SIZE,
            relative_scaling: DEFAULT_RELATIVE_SCALING,
            prefer_horizontal: DEFAULT_PREFER_HORIZONTAL,
        }
    }
}
