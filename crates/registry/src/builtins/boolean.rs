//! Boolean converter with configurable labels.

use std::any::Any;

use typecast_core::{Converter, ConverterContext};

/// Serializes booleans as a configurable label pair.
///
/// Deserialization matches the configured labels case-insensitively and always
/// accepts the English literals `true`/`false` as a fallback, so persisted
/// values survive a label change.
pub struct BooleanConverter {
	true_label: String,
	false_label: String,
}

impl BooleanConverter {
	/// Creates a converter with the `"true"`/`"false"` labels.
	pub fn new() -> Self {
		Self::with_labels("true", "false")
	}

	/// Creates a converter with custom labels.
	pub fn with_labels(true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
		Self {
			true_label: true_label.into(),
			false_label: false_label.into(),
		}
	}

	fn parse(&self, text: &str) -> Option<bool> {
		let text = text.trim();
		if text.eq_ignore_ascii_case(&self.true_label) || text.eq_ignore_ascii_case("true") {
			Some(true)
		} else if text.eq_ignore_ascii_case(&self.false_label) || text.eq_ignore_ascii_case("false") {
			Some(false)
		} else {
			None
		}
	}
}

impl Default for BooleanConverter {
	fn default() -> Self {
		Self::new()
	}
}

impl Converter for BooleanConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<bool>() {
			Some(true) => self.true_label.clone(),
			Some(false) => self.false_label.clone(),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		self.parse(text).map(|v| Box::new(v) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<bool>()
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		self.parse(text).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ctx() -> ConverterContext {
		ConverterContext::default()
	}

	fn parse(conv: &BooleanConverter, text: &str) -> Option<bool> {
		conv.from_text(text, &ctx()).map(|b| *b.downcast::<bool>().unwrap())
	}

	#[test]
	fn default_labels() {
		let conv = BooleanConverter::new();
		assert_eq!(conv.to_text(&true, &ctx()), "true");
		assert_eq!(conv.to_text(&false, &ctx()), "false");
	}

	#[test]
	fn literal_fallback_any_case() {
		let conv = BooleanConverter::with_labels("ja", "nein");
		assert_eq!(parse(&conv, "true"), Some(true));
		assert_eq!(parse(&conv, "TRUE"), Some(true));
		assert_eq!(parse(&conv, "False"), Some(false));
	}

	#[test]
	fn custom_labels_case_insensitive() {
		let conv = BooleanConverter::with_labels("Ja", "Nein");
		assert_eq!(conv.to_text(&true, &ctx()), "Ja");
		assert_eq!(parse(&conv, "ja"), Some(true));
		assert_eq!(parse(&conv, "NEIN"), Some(false));
		assert_eq!(parse(&conv, "oui"), None);
	}
}
