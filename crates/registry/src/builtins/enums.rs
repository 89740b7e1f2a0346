//! Enumerated-label converter.

use std::any::Any;

use typecast_core::{Converter, ConverterContext};

/// Maps between a fixed set of values and their display labels.
///
/// Not pre-registered: converter authors construct one with their own value
/// set and register it for their type. Serialization looks the value up in
/// pair order; deserialization matches labels exactly first, then
/// case-insensitively.
pub struct EnumConverter<T> {
	pairs: Vec<(T, String)>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> EnumConverter<T> {
	/// Creates a converter from `(value, label)` pairs.
	pub fn new<L: Into<String>>(pairs: impl IntoIterator<Item = (T, L)>) -> Self {
		Self {
			pairs: pairs.into_iter().map(|(v, l)| (v, l.into())).collect(),
		}
	}

	fn value_for(&self, label: &str) -> Option<&T> {
		self.pairs
			.iter()
			.find(|(_, l)| l == label)
			.or_else(|| self.pairs.iter().find(|(_, l)| l.eq_ignore_ascii_case(label.trim())))
			.map(|(v, _)| v)
	}

	fn label_for(&self, value: &T) -> Option<&str> {
		self.pairs.iter().find(|(v, _)| v == value).map(|(_, l)| l.as_str())
	}
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Converter for EnumConverter<T> {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		value
			.downcast_ref::<T>()
			.and_then(|v| self.label_for(v))
			.map(str::to_string)
			.unwrap_or_default()
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		self.value_for(text).map(|v| Box::new(v.clone()) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.downcast_ref::<T>().is_some_and(|v| self.label_for(v).is_some())
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		self.value_for(text).is_some()
	}
}
