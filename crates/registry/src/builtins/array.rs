//! Array converter delegating per-element conversion.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use typecast_core::{Converter, ConverterContext};

/// Converter for `Vec<T>` that delegates each element to an inner converter.
///
/// Elements are converted under the element form of the array's context
/// (array-suffix convention: a `"hex[]"` array converts its elements under
/// `"hex"`). Serialization joins element texts with the separator; empty input
/// deserializes to an empty vector, never `None`, and any element that fails
/// to parse fails the whole text.
pub struct ArrayConverter<T> {
	separator: String,
	element: Arc<dyn Converter>,
	_marker: PhantomData<fn() -> T>,
}

impl<T> ArrayConverter<T> {
	/// Creates a converter with the default `"; "` separator.
	pub fn new(element: Arc<dyn Converter>) -> Self {
		Self::with_separator(element, "; ")
	}

	/// Creates a converter with a custom separator.
	pub fn with_separator(element: Arc<dyn Converter>, separator: impl Into<String>) -> Self {
		Self {
			separator: separator.into(),
			element,
			_marker: PhantomData,
		}
	}
}

impl<T: Any + Send + Sync + Clone> ArrayConverter<T> {
	fn parse(&self, text: &str, context: &ConverterContext) -> Option<Vec<T>> {
		if text.trim().is_empty() {
			return Some(Vec::new());
		}

		// Splitting on the trimmed separator keeps "1;2" and "1; 2" both
		// parseable when the display separator carries whitespace.
		let split_on = match self.separator.trim() {
			"" => self.separator.as_str(),
			trimmed => trimmed,
		};
		let element_context = context.element();

		let mut out = Vec::new();
		for token in text.split(split_on) {
			let boxed = self.element.from_text(token.trim(), &element_context)?;
			out.push(*boxed.downcast::<T>().ok()?);
		}
		Some(out)
	}
}

impl<T: Any + Send + Sync + Clone> Converter for ArrayConverter<T> {
	fn to_text(&self, value: &dyn Any, context: &ConverterContext) -> String {
		let Some(items) = value.downcast_ref::<Vec<T>>() else {
			return String::new();
		};
		let element_context = context.element();
		items
			.iter()
			.map(|item| self.element.to_text(item, &element_context))
			.collect::<Vec<_>>()
			.join(&self.separator)
	}

	fn from_text(&self, text: &str, context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		self.parse(text, context).map(|v| Box::new(v) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<Vec<T>>()
	}

	fn supports_from_text(&self, text: &str, context: &ConverterContext) -> bool {
		self.parse(text, context).is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builtins::numeric::NumberConverter;
	use crate::builtins::text::StringConverter;

	fn ctx() -> ConverterContext {
		ConverterContext::default()
	}

	fn int_array() -> ArrayConverter<i32> {
		ArrayConverter::new(Arc::new(NumberConverter::<i32>::new()))
	}

	#[test]
	fn join_and_split() {
		let conv = int_array();
		let items = vec![1, 2, 3];
		let text = conv.to_text(&items, &ctx());
		assert_eq!(text, "1; 2; 3");
		let back = conv.from_text(&text, &ctx()).unwrap();
		assert_eq!(*back.downcast::<Vec<i32>>().unwrap(), items);
	}

	#[test]
	fn tight_separator_accepted() {
		let conv = int_array();
		let back = conv.from_text("1;2;3", &ctx()).unwrap();
		assert_eq!(*back.downcast::<Vec<i32>>().unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn empty_text_is_empty_array() {
		let conv = int_array();
		let back = conv.from_text("", &ctx()).unwrap();
		assert!(back.downcast::<Vec<i32>>().unwrap().is_empty());
	}

	#[test]
	fn failing_element_fails_whole_text() {
		let conv = int_array();
		assert!(conv.from_text("1; x; 3", &ctx()).is_none());
		assert!(!conv.supports_from_text("1; x; 3", &ctx()));
	}

	#[test]
	fn custom_separator() {
		let conv = ArrayConverter::<String>::with_separator(Arc::new(StringConverter), " | ");
		let items = vec!["a".to_string(), "b".to_string()];
		let text = conv.to_text(&items, &ctx());
		assert_eq!(text, "a | b");
		let back = conv.from_text(&text, &ctx()).unwrap();
		assert_eq!(*back.downcast::<Vec<String>>().unwrap(), items);
	}

	#[test]
	fn elements_use_element_context() {
		struct CtxEcho;

		impl Converter for CtxEcho {
			fn to_text(&self, _value: &dyn Any, context: &ConverterContext) -> String {
				context.name().to_string()
			}

			fn from_text(&self, _text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
				None
			}

			fn supports_to_text(&self, _value: &dyn Any, _context: &ConverterContext) -> bool {
				true
			}

			fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
				false
			}
		}

		let conv = ArrayConverter::<i32>::new(Arc::new(CtxEcho));
		let text = conv.to_text(&vec![1, 2], &ConverterContext::new("hex[]"));
		assert_eq!(text, "hex; hex");
	}
}
