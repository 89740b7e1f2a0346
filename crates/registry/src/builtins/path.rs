//! File path converter.

use std::any::Any;
use std::path::PathBuf;

use typecast_core::{Converter, ConverterContext};

/// `PathBuf` ⇔ its display form.
///
/// Serialization is lossy for paths that are not valid UTF-8; interactive
/// editing widgets only ever see text, so that is the accepted trade.
pub struct PathConverter;

impl Converter for PathConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<PathBuf>() {
			Some(path) => path.display().to_string(),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		Some(Box::new(PathBuf::from(text)))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<PathBuf>()
	}

	fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
		true
	}
}
