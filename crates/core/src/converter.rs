//! The bidirectional text conversion capability.

use std::any::Any;

use crate::context::ConverterContext;

/// A bidirectional text/value transformation unit for one data type under one
/// context.
///
/// Converters are registered once and never mutated by the registry;
/// formatting options (separators, format strings, labels) are fixed at
/// construction. Implementations must degrade gracefully: malformed input
/// yields `None` from [`from_text`](Converter::from_text), never a panic.
pub trait Converter: Send + Sync {
	/// Serializes a value to its text form.
	///
	/// Callers are expected to check [`supports_to_text`](Converter::supports_to_text)
	/// first; an unsupported value serializes to the empty string.
	fn to_text(&self, value: &dyn Any, context: &ConverterContext) -> String;

	/// Deserializes text back into a value, or `None` if the text is not a
	/// valid representation.
	fn from_text(&self, text: &str, context: &ConverterContext) -> Option<Box<dyn Any + Send>>;

	/// Returns true if this converter can serialize the given value.
	fn supports_to_text(&self, value: &dyn Any, context: &ConverterContext) -> bool;

	/// Returns true if this converter is willing to attempt deserializing the
	/// given text.
	fn supports_from_text(&self, text: &str, context: &ConverterContext) -> bool;
}
