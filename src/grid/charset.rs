//! Glyph tables and stage two of drawing: tokens to characters.

use super::token::{Heading, Token};
use crate::style::{ArrowStyle, LineStyle, PartialStyle, Style, StyleMode};

/// Glyph of an empty cell
pub const BLANK_GLYPH: char = ' ';
/// Glyph for anything that cannot be drawn in a monospaced cell
pub const UNKNOWN_GLYPH: char = '?';

/// Box-drawing set for one line style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChars {
    pub h: char,
    pub v: char,
    pub tl: char,
    pub tr: char,
    pub bl: char,
    pub br: char,
}

impl LineChars {
    pub const ASCII: LineChars = LineChars {
        h: '-',
        v: '|',
        tl: '+',
        tr: '+',
        bl: '+',
        br: '+',
    };

    pub const LIGHT: LineChars = LineChars {
        h: '─',
        v: '│',
        tl: '┌',
        tr: '┐',
        bl: '└',
        br: '┘',
    };

    pub const HEAVY: LineChars = LineChars {
        h: '━',
        v: '┃',
        tl: '┏',
        tr: '┓',
        bl: '┗',
        br: '┛',
    };

    pub fn for_style(style: LineStyle) -> LineChars {
        match style {
            LineStyle::Ascii => Self::ASCII,
            LineStyle::Light => Self::LIGHT,
            LineStyle::Heavy => Self::HEAVY,
        }
    }
}

/// Arrowhead set for one arrow style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowChars {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
}

impl ArrowChars {
    pub const ASCII: ArrowChars = ArrowChars {
        up: '^',
        down: 'v',
        left: '<',
        right: '>',
    };

    pub const OUTLINED: ArrowChars = ArrowChars {
        up: '△',
        down: '▽',
        left: '◁',
        right: '▷',
    };

    pub const FILLED: ArrowChars = ArrowChars {
        up: '▲',
        down: '▼',
        left: '◀',
        right: '▶',
    };

    pub fn for_style(style: ArrowStyle) -> ArrowChars {
        match style {
            ArrowStyle::Ascii => Self::ASCII,
            ArrowStyle::Outlined => Self::OUTLINED,
            ArrowStyle::Filled => Self::FILLED,
        }
    }

    fn pointing(&self, heading: Heading) -> char {
        match heading {
            Heading::Up => self.up,
            Heading::Down => self.down,
            Heading::Left => self.left,
            Heading::Right => self.right,
        }
    }
}

/// Everything needed to pick the glyph of a token
#[derive(Debug, Clone, Copy)]
pub struct GlyphContext<'a> {
    pub style_mode: StyleMode,
    pub global_style: &'a Style,
    pub shape_style: Option<&'a PartialStyle>,
}

/// Resolve one token to the character drawn in its cell.
///
/// Literal glyphs are returned as they are, except control characters, which
/// become [`UNKNOWN_GLYPH`] so every cell stays one column wide. Arrowheads
/// fall back to the plain
/// line glyph of their orientation when the matching head is switched off.
pub fn get_char_repr(token: Token, ctx: &GlyphContext<'_>) -> char {
    if let Token::Glyph(ch) = token {
        return if ch.is_control() { UNKNOWN_GLYPH } else { ch };
    }

    let style = ctx.global_style.merged(ctx.shape_style);
    let (lines, arrows) = match ctx.style_mode {
        StyleMode::Ascii => (LineChars::ASCII, ArrowChars::ASCII),
        StyleMode::Unicode => (
            LineChars::for_style(style.line_style),
            ArrowChars::for_style(style.arrow_style),
        ),
    };
    let plain = |heading: Heading| if heading.is_vertical() { lines.v } else { lines.h };

    match token {
        Token::CornerTl => lines.tl,
        Token::CornerTr => lines.tr,
        Token::CornerBl => lines.bl,
        Token::CornerBr => lines.br,
        Token::LineHorizontal => lines.h,
        Token::LineVertical => lines.v,
        Token::LineheadStart(heading) if style.arrow_start_head => arrows.pointing(heading),
        Token::LineheadEnd(heading) if style.arrow_end_head => arrows.pointing(heading),
        Token::LineheadStart(heading) | Token::LineheadEnd(heading) => plain(heading),
        Token::Glyph(_) => UNKNOWN_GLYPH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(mode: StyleMode, global: &'a Style, shape: Option<&'a PartialStyle>) -> GlyphContext<'a> {
        GlyphContext {
            style_mode: mode,
            global_style: global,
            shape_style: shape,
        }
    }

    #[test]
    fn literal_glyph_bypasses_style() {
        let global = Style::default();
        assert_eq!(get_char_repr(Token::Glyph('A'), &ctx(StyleMode::Ascii, &global, None)), 'A');
        assert_eq!(get_char_repr(Token::Glyph('\t'), &ctx(StyleMode::Unicode, &global, None)), UNKNOWN_GLYPH);
    }

    #[test]
    fn ascii_mode_forces_ascii() {
        let global = Style {
            line_style: LineStyle::Heavy,
            ..Style::default()
        };
        let c = ctx(StyleMode::Ascii, &global, None);
        assert_eq!(get_char_repr(Token::CornerTl, &c), '+');
        assert_eq!(get_char_repr(Token::LineheadEnd(Heading::Right), &c), '>');
    }

    #[test]
    fn shape_style_overrides_global() {
        let global = Style::default();
        let heavy = PartialStyle {
            line_style: Some(LineStyle::Heavy),
            arrow_style: Some(ArrowStyle::Outlined),
            ..Default::default()
        };
        let c = ctx(StyleMode::Unicode, &global, Some(&heavy));
        assert_eq!(get_char_repr(Token::LineVertical, &c), '┃');
        assert_eq!(get_char_repr(Token::LineheadEnd(Heading::Up), &c), '△');
    }

    #[test]
    fn disabled_heads_draw_plain_line() {
        let global = Style::default();
        let c = ctx(StyleMode::Unicode, &global, None);
        assert!(!global.arrow_start_head);
        assert_eq!(get_char_repr(Token::LineheadStart(Heading::Left), &c), '─');
        assert_eq!(get_char_repr(Token::LineheadStart(Heading::Up), &c), '│');
        assert_eq!(get_char_repr(Token::LineheadEnd(Heading::Down), &c), '▼');
    }
}
