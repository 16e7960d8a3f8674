//! Requested-size parsing and per-variant size resolution.

use crate::error::{ResizeError, Result};

/// A requested output dimension: either a concrete pixel value or `auto`,
/// which lets the resize primitive infer the dimension from the source
/// aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Auto,
    Px(f32),
}

impl Dimension {
    /// Parse user input for a named dimension.
    ///
    /// Accepts the literal `auto` (case-insensitive) or a number >= 2;
    /// smaller values would produce degenerate sub-pixel targets once a
    /// density factor below 1 is conceivable, so they are rejected outright.
    pub fn parse(field: &'static str, raw: &str) -> Result<Dimension> {
        let value = raw.trim().to_lowercase();
        if value.is_empty() {
            return Err(ResizeError::MissingSize(field));
        }
        if value == "auto" {
            return Ok(Dimension::Auto);
        }
        let number: f32 = value.parse().map_err(|_| ResizeError::InvalidSize {
            field,
            value: raw.to_string(),
        })?;
        // f32::parse accepts "nan" and "inf"; neither is a usable dimension.
        if !number.is_finite() {
            return Err(ResizeError::InvalidSize {
                field,
                value: raw.to_string(),
            });
        }
        if number < 2.0 {
            return Err(ResizeError::SizeTooSmall(field));
        }
        Ok(Dimension::Px(number))
    }

    /// Resolve this dimension against a scale factor.
    ///
    /// `Auto` passes through as `None` so the resize primitive preserves the
    /// aspect ratio; numeric values are multiplied and rounded half-up, since
    /// platform tooling expects integer pixel dimensions.
    pub fn scaled(self, factor: f32) -> Option<u32> {
        match self {
            Dimension::Auto => None,
            Dimension::Px(value) => Some(((value * factor).round() as u32).max(1)),
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

/// Parse a width/height pair, enforcing that both are present and that they
/// are not both `auto` (no well-defined aspect-preserving scale in that case).
pub fn parse_pair(width: Option<&str>, height: Option<&str>) -> Result<(Dimension, Dimension)> {
    let width = Dimension::parse("Width", width.ok_or(ResizeError::MissingSize("Width"))?)?;
    let height = Dimension::parse("Height", height.ok_or(ResizeError::MissingSize("Height"))?)?;
    if width.is_auto() && height.is_auto() {
        return Err(ResizeError::BothAuto);
    }
    Ok((width, height))
}
