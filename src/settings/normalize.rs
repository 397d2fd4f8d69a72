//! Raw option normalization
//!
//! `normalize` is a pure function: the same [`RawOptions`] always produce the
//! same [`Settings`] or the same [`NormalizeError`]. It never returns partially
//! filled settings.

use std::num::IntErrorKind;

use super::error::NormalizeError;
use super::options::{BackgroundPreset, ColorPalette, FontFamily, MaskShape};
use super::types::*;

/// Sentinel value selecting a user-supplied color.
pub const CUSTOM: &str = "custom";

/// Picked color used when `background_color == "custom"` and nothing was picked.
pub const DEFAULT_CUSTOM_BACKGROUND: &str = "#ffffff";

/// Turn raw UI-level option values into validated [`Settings`].
///
/// - Empty numeric strings mean "absent": frequency bounds become `None`,
///   every other numeric field takes its default.
/// - Non-empty strings that are not integers (or floats, for the ratio
///   fields) abort with `InvalidNumber`.
/// - Numbers outside their documented bounds are clamped into them. This
///   includes integers too large for `i64`, and frequency bounds below 1
///   (`max_frequency = 0` becomes 1).
/// - `min_frequency > max_frequency` or `min_font_size > max_font_size`
///   abort with `InvertedRange`.
pub fn normalize(raw: &RawOptions) -> Result<Settings, NormalizeError> {
    let defaults = Settings::default();

    let min_frequency = parse_int("min_frequency", raw.min_frequency.as_deref())?
        .map(|v| clamp_int(v, FREQUENCY_BOUNDS));
    let max_frequency = parse_int("max_frequency", raw.max_frequency.as_deref())?
        .map(|v| clamp_int(v, FREQUENCY_BOUNDS));
    if let (Some(min), Some(max)) = (min_frequency, max_frequency) {
        if min > max {
            return Err(NormalizeError::InvertedRange {
                min_field: "min_frequency",
                max_field: "max_frequency",
                min,
                max,
            });
        }
    }

    let width = bounded_int("width", raw.width.as_deref(), defaults.width, WIDTH_BOUNDS)?;
    let height = bounded_int("height", raw.height.as_deref(), defaults.height, HEIGHT_BOUNDS)?;
    let max_words = bounded_int(
        "max_words",
        raw.max_words.as_deref(),
        defaults.max_words,
        MAX_WORDS_BOUNDS,
    )?;
    let min_font_size = bounded_int(
        "min_font_size",
        raw.min_font_size.as_deref(),
        defaults.min_font_size,
        MIN_FONT_SIZE_BOUNDS,
    )?;
    let max_font_size = bounded_int(
        "max_font_size",
        raw.max_font_size.as_deref(),
        defaults.max_font_size,
        MAX_FONT_SIZE_BOUNDS,
    )?;
    if min_font_size > max_font_size {
        return Err(NormalizeError::InvertedRange {
            min_field: "min_font_size",
            max_field: "max_font_size",
            min: min_font_size,
            max: max_font_size,
        });
    }

    let relative_scaling = bounded_float(
        "relative_scaling",
        raw.relative_scaling.as_deref(),
        defaults.relative_scaling,
    )?;
    let prefer_horizontal = bounded_float(
        "prefer_horizontal",
        raw.prefer_horizontal.as_deref(),
        defaults.prefer_horizontal,
    )?;

    Ok(Settings {
        remove_stopwords: raw.remove_stopwords.unwrap_or(defaults.remove_stopwords),
        custom_stopwords: split_list(raw.custom_stopwords.as_deref()),
        mask_shape: enum_option("mask_shape", raw.mask_shape.as_deref(), MaskShape::parse)?
            .unwrap_or(defaults.mask_shape),
        min_frequency,
        max_frequency,
        color_scheme: color_scheme(raw)?,
        background_color: background_color(raw)?,
        font_family: enum_option("font_family", raw.font_family.as_deref(), FontFamily::parse)?
            .unwrap_or(defaults.font_family),
        width,
        height,
        max_words,
        min_font_size,
        max_font_size,
        relative_scaling,
        prefer_horizontal,
    })
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn color_scheme(raw: &RawOptions) -> Result<ColorScheme, NormalizeError> {
    let Some(name) = non_empty(raw.color_scheme.as_deref()) else {
        return Ok(ColorScheme::default());
    };

    if name.eq_ignore_ascii_case(CUSTOM) {
        let colors = split_list(raw.custom_colors.as_deref());
        if let Some(bad) = colors.iter().find(|c| !is_hex_color(c)) {
            return Err(NormalizeError::InvalidColor {
                field: "custom_colors",
                value: bad.clone(),
            });
        }
        return Ok(ColorScheme::Custom(colors));
    }

    ColorPalette::parse(name)
        .map(ColorScheme::Palette)
        .ok_or_else(|| NormalizeError::UnknownOption {
            field: "color_scheme",
            value: name.to_string(),
        })
}

fn background_color(raw: &RawOptions) -> Result<BackgroundColor, NormalizeError> {
    let Some(name) = non_empty(raw.background_color.as_deref()) else {
        return Ok(BackgroundColor::default());
    };

    if name.eq_ignore_ascii_case(CUSTOM) {
        let picked =
            non_empty(raw.custom_background_color.as_deref()).unwrap_or(DEFAULT_CUSTOM_BACKGROUND);
        if !is_hex_color(picked) {
            return Err(NormalizeError::InvalidColor {
                field: "custom_background_color",
                value: picked.to_string(),
            });
        }
        return Ok(BackgroundColor::Hex(picked.to_string()));
    }

    BackgroundPreset::parse(name)
        .map(BackgroundColor::Preset)
        .ok_or_else(|| NormalizeError::UnknownOption {
            field: "background_color",
            value: name.to_string(),
        })
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn enum_option<T>(
    field: &'static str,
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, NormalizeError> {
    match non_empty(raw) {
        None => Ok(None),
        Some(name) => parse(name)
            .map(Some)
            .ok_or_else(|| NormalizeError::UnknownOption {
                field,
                value: name.to_string(),
            }),
    }
}

/// Integers beyond `i64` saturate so the caller's clamp still applies.
fn parse_int(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, NormalizeError> {
    let Some(text) = non_empty(raw) else {
        return Ok(None);
    };
    match text.parse::<i64>() {
        Ok(value) => Ok(Some(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(NormalizeError::InvalidNumber {
                field,
                value: text.to_string(),
            }),
        },
    }
}

fn clamp_int(value: i64, (lo, hi): Bounds<u32>) -> u32 {
    value.clamp(i64::from(lo), i64::from(hi)) as u32
}

fn bounded_int(
    field: &'static str,
    raw: Option<&str>,
    default: u32,
    bounds: Bounds<u32>,
) -> Result<u32, NormalizeError> {
    Ok(parse_int(field, raw)?
        .map(|v| clamp_int(v, bounds))
        .unwrap_or(default))
}

fn bounded_float(
    field: &'static str,
    raw: Option<&str>,
    default: f64,
) -> Result<f64, NormalizeError> {
    let Some(text) = non_empty(raw) else {
        return Ok(default);
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v.clamp(UNIT_BOUNDS.0, UNIT_BOUNDS.1)),
        _ => Err(NormalizeError::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}
