//! Line and arrow styling.
//!
//! A document carries one global [`Style`]; every shape may override any of
//! its fields with a [`PartialStyle`]. [`StyleMode::Ascii`] overrides both and
//! forces plain ASCII glyphs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineStyle {
    Ascii,
    #[default]
    Light,
    Heavy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowStyle {
    Ascii,
    Outlined,
    #[default]
    Filled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleMode {
    Ascii,
    #[default]
    Unicode,
}

/// Fully resolved style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub line_style: LineStyle,
    pub arrow_style: ArrowStyle,
    pub arrow_start_head: bool,
    pub arrow_end_head: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Light,
            arrow_style: ArrowStyle::Filled,
            arrow_start_head: false,
            arrow_end_head: true,
        }
    }
}

impl Style {
    /// Apply every field set in `partial` on top of this style
    pub fn merged(&self, partial: Option<&PartialStyle>) -> Style {
        let Some(partial) = partial else {
            return *self;
        };
        Style {
            line_style: partial.line_style.unwrap_or(self.line_style),
            arrow_style: partial.arrow_style.unwrap_or(self.arrow_style),
            arrow_start_head: partial.arrow_start_head.unwrap_or(self.arrow_start_head),
            arrow_end_head: partial.arrow_end_head.unwrap_or(self.arrow_end_head),
        }
    }
}

/// Per-shape override; unset fields fall back to the global style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_style: Option<ArrowStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_start_head: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_end_head: Option<bool>,
}

impl PartialStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fields set in `other` win
    pub fn merged(&self, other: &PartialStyle) -> PartialStyle {
        PartialStyle {
            line_style: other.line_style.or(self.line_style),
            arrow_style: other.arrow_style.or(self.arrow_style),
            arrow_start_head: other.arrow_start_head.or(self.arrow_start_head),
            arrow_end_head: other.arrow_end_head.or(self.arrow_end_head),
        }
    }
}
