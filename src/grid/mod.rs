//! Shapes to cells.
//!
//! Drawing happens in two stages. [`representation`] turns each shape into
//! style-independent [`Token`]s keyed by cell; [`charset`] resolves each token
//! to a literal character under the effective style.

pub mod charset;
pub mod representation;
mod token;

pub use charset::{BLANK_GLYPH, GlyphContext, UNKNOWN_GLYPH, get_char_repr};
pub use representation::{
    get_abstract_shape_representation, get_canvas_representation, get_document_representation,
};
pub use token::{GridRepr, Heading, Token};
