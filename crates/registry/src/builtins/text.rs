//! String passthrough and password masking.

use std::any::Any;

use typecast_core::{Converter, ConverterContext};

/// Identity converter for `String`.
///
/// Also registered under the `"multiline"` context so multi-line editors can
/// be bound to a distinct registration.
pub struct StringConverter;

impl Converter for StringConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		value.downcast_ref::<String>().cloned().unwrap_or_default()
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		Some(Box::new(text.to_string()))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<String>()
	}

	fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
		true
	}
}

/// Masks every character on serialize; deserializes as passthrough.
pub struct PasswordConverter {
	mask: char,
}

impl PasswordConverter {
	/// Creates a converter masking with `'*'`.
	pub fn new() -> Self {
		Self::with_mask('*')
	}

	/// Creates a converter with a custom mask character.
	pub fn with_mask(mask: char) -> Self {
		Self { mask }
	}
}

impl Default for PasswordConverter {
	fn default() -> Self {
		Self::new()
	}
}

impl Converter for PasswordConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<String>() {
			Some(v) => std::iter::repeat_n(self.mask, v.chars().count()).collect(),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		Some(Box::new(text.to_string()))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<String>()
	}

	fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
		true
	}
}
