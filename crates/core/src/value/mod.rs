//! Plain value types shipped with the builtin converters.

mod color;
mod font;

pub use color::Color;
pub use font::{FontSpec, FontStyle};
