//! Enumerated option vocabularies understood by the rendering backend.

use serde::{Deserialize, Serialize};

/// Named color palettes. `custom` is not a palette; it is resolved to a
/// hex list during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Rainbow,
    Blues,
    Reds,
    Greens,
    Purples,
    Greys,
    Spectral,
    Coolwarm,
}

impl ColorPalette {
    pub const ALL: [ColorPalette; 13] = [
        ColorPalette::Viridis,
        ColorPalette::Plasma,
        ColorPalette::Inferno,
        ColorPalette::Magma,
        ColorPalette::Cividis,
        ColorPalette::Rainbow,
        ColorPalette::Blues,
        ColorPalette::Reds,
        ColorPalette::Greens,
        ColorPalette::Purples,
        ColorPalette::Greys,
        ColorPalette::Spectral,
        ColorPalette::Coolwarm,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorPalette::Viridis => "viridis",
            ColorPalette::Plasma => "plasma",
            ColorPalette::Inferno => "inferno",
            ColorPalette::Magma => "magma",
            ColorPalette::Cividis => "cividis",
            ColorPalette::Rainbow => "rainbow",
            ColorPalette::Blues => "blues",
            ColorPalette::Reds => "reds",
            ColorPalette::Greens => "greens",
            ColorPalette::Purples => "purples",
            ColorPalette::Greys => "greys",
            ColorPalette::Spectral => "spectral",
            ColorPalette::Coolwarm => "coolwarm",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Seven representative colors, low to high.
    pub fn preview(&self) -> [&'static str; 7] {
        match self {
            ColorPalette::Viridis => [
                "#440154", "#443982", "#31688e", "#21918c", "#35b779", "#8fd744", "#fde725",
            ],
            ColorPalette::Plasma => [
                "#0d0887", "#5302a3", "#8b0aa5", "#b83289", "#db5c68", "#f48849", "#febc2a",
            ],
            ColorPalette::Inferno => [
                "#000004", "#320a5a", "#781c6d", "#bb3754", "#ed6925", "#fbb61a", "#fcffa4",
            ],
            ColorPalette::Magma => [
                "#000004", "#2c115f", "#711f81", "#b73779", "#f0605d", "#feae76", "#fbfcbf",
            ],
            ColorPalette::Cividis => [
                "#00204c", "#213d6b", "#555b6c", "#7a7a78", "#a59c74", "#d3c064", "#ffe945",
            ],
            ColorPalette::Rainbow => [
                "#6e40aa", "#1f77b4", "#56b4e9", "#3fa34d", "#eaff00", "#ff7f0e", "#e31a1c",
            ],
            ColorPalette::Blues => [
                "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#084594",
            ],
            ColorPalette::Reds => [
                "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#de2d26", "#a50f15",
            ],
            ColorPalette::Greens => [
                "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#006d2c",
            ],
            ColorPalette::Purples => [
                "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#4a1486",
            ],
            ColorPalette::Greys => [
                "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#636363", "#252525",
            ],
            ColorPalette::Spectral => [
                "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#e6f598", "#3288bd",
            ],
            ColorPalette::Coolwarm => [
                "#3b4cc0", "#6789ee", "#9fc3fe", "#dddcdc", "#f6b69b", "#e6745a", "#b40426",
            ],
        }
    }
}

/// Named background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPreset {
    White,
    Black,
    Transparent,
    Lightgrey,
    Darkgrey,
    Lightblue,
    Lightgreen,
    Lightred,
}

impl BackgroundPreset {
    pub const ALL: [BackgroundPreset; 8] = [
        BackgroundPreset::White,
        BackgroundPreset::Black,
        BackgroundPreset::Transparent,
        BackgroundPreset::Lightgrey,
        BackgroundPreset::Darkgrey,
        BackgroundPreset::Lightblue,
        BackgroundPreset::Lightgreen,
        BackgroundPreset::Lightred,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            BackgroundPreset::White => "white",
            BackgroundPreset::Black => "black",
            BackgroundPreset::Transparent => "transparent",
            BackgroundPreset::Lightgrey => "lightgrey",
            BackgroundPreset::Darkgrey => "darkgrey",
            BackgroundPreset::Lightblue => "lightblue",
            BackgroundPreset::Lightgreen => "lightgreen",
            BackgroundPreset::Lightred => "lightred",
        }
    }

    /// Look up a value by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// Display swatch; `None` for transparent.
    pub fn swatch(&self) -> Option<&'static str> {
        match self {
            BackgroundPreset::White => Some("#ffffff"),
            BackgroundPreset::Black => Some("#000000"),
            BackgroundPreset::Transparent => None,
            BackgroundPreset::Lightgrey => Some("#f0f0f0"),
            BackgroundPreset::Darkgrey => Some("#333333"),
            BackgroundPreset::Lightblue => Some("#e6f7ff"),
            BackgroundPreset::Lightgreen => Some("#e6fff0"),
            BackgroundPreset::Lightred => Some("#fff0f0"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[serde(rename = "arial")]
    Arial,
    #[serde(rename = "times new roman")]
    TimesNewRoman,
    #[serde(rename = "courier new")]
    CourierNew,
    #[serde(rename = "georgia")]
    Georgia,
    #[serde(rename = "verdana")]
    Verdana,
    #[serde(rename = "impact")]
    Impact,
    #[serde(rename = "comic sans ms")]
    ComicSansMs,
    #[serde(rename = "tahoma")]
    Tahoma,
    #[serde(rename = "trebuchet ms")]
    TrebuchetMs,
}

impl FontFamily {
    pub const ALL: [FontFamily; 9] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::Verdana,
        FontFamily::Impact,
        FontFamily::ComicSansMs,
        FontFamily::Tahoma,
        FontFamily::TrebuchetMs,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "arial",
            FontFamily::TimesNewRoman => "times new roman",
            FontFamily::CourierNew => "courier new",
            FontFamily::Georgia => "georgia",
            FontFamily::Verdana => "verdana",
            FontFamily::Impact => "impact",
            FontFamily::ComicSansMs => "comic sans ms",
            FontFamily::Tahoma => "tahoma",
            FontFamily::TrebuchetMs => "trebuchet ms",
        }
    }

    /// Case-insensitive lookup; inner whitespace is collapsed so
    /// `"Times  New Roman"` resolves too.
    pub fn parse(name: &str) -> Option<Self> {
        let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(&collapsed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskShape {
    None,
    Circle,
    Diamond,
    Star,
    Triangle,
    Cloud,
    Heart,
}

impl MaskShape {
    pub const ALL: [MaskShape; 7] = [
        MaskShape::None,
        MaskShape::Circle,
        MaskShape::Diamond,
        MaskShape::Star,
        MaskShape::Triangle,
        MaskShape::Cloud,
        MaskShape::Heart,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            MaskShape::None => "none",
            MaskShape::Circle => "circle",
            MaskShape::Diamond => "diamond",
            MaskShape::Star => "star",
            MaskShape::Triangle => "triangle",
            MaskShape::Cloud => "cloud",
            MaskShape::Heart => "heart",
        }
    }

    /// Look up a value by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}
