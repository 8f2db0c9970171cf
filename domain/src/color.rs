use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS form used for persisted palettes: `rgb(r,g,b)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub fn from_css(css: &str) -> DomainResult<Self> {
        let inner = css
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| DomainError::InvalidColorFormat(css.to_string()))?;

        let mut channels = inner.split(',').map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| DomainError::InvalidColorFormat(css.to_string()))
        });

        let r = channels
            .next()
            .ok_or_else(|| DomainError::InvalidColorFormat(css.to_string()))??;
        let g = channels
            .next()
            .ok_or_else(|| DomainError::InvalidColorFormat(css.to_string()))??;
        let b = channels
            .next()
            .ok_or_else(|| DomainError::InvalidColorFormat(css.to_string()))??;

        if channels.next().is_some() {
            return Err(DomainError::InvalidColorFormat(css.to_string()));
        }

        Ok(Self { r, g, b })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Ordered most-to-least dominant; index 0 drives the primary glow in the UI.
pub type Palette = Vec<RgbColor>;

pub fn palette_to_css(palette: &[RgbColor]) -> Vec<String> {
    palette.iter().map(RgbColor::to_css).collect()
}

pub fn palette_from_css(values: &[String]) -> DomainResult<Palette> {
    values.iter().map(|css| RgbColor::from_css(css)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn css_round_trip() {
        let color = RgbColor::new(12, 240, 7);
        assert_eq!(color.to_css(), "rgb(12,240,7)");
        assert_eq!(RgbColor::from_css("rgb(12,240,7)").ok(), Some(color));
    }

    #[test]
    fn parses_with_spaces() {
        assert_eq!(
            RgbColor::from_css(" rgb(1, 2, 3) ").ok(),
            Some(RgbColor::new(1, 2, 3))
        );
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "rgb()", "rgb(1,2)", "rgb(1,2,3,4)", "rgba(1,2,3)", "rgb(256,0,0)"] {
            assert!(RgbColor::from_css(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn palette_preserves_order() {
        let css = vec![
            "rgb(1,1,1)".to_string(),
            "rgb(2,2,2)".to_string(),
            "rgb(3,3,3)".to_string(),
        ];
        let palette = palette_from_css(&css).ok().unwrap_or_default();
        assert_eq!(palette_to_css(&palette), css);
    }
}
