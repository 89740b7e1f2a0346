//! The default converter used when resolution finds nothing.

use std::any::Any;

use typecast_core::{Converter, ConverterContext};

/// Last-resort converter handed out by the manager when no registration
/// matches.
///
/// Serializes the common primitive types via `Display` and everything else as
/// the empty string; deserializes by returning the raw text as a `String`, so
/// only `String` targets survive the typed downcast.
pub struct FallbackConverter;

macro_rules! display_chain {
	($value:expr, $($ty:ty),+ $(,)?) => {
		$(
			if let Some(v) = $value.downcast_ref::<$ty>() {
				return v.to_string();
			}
		)+
	};
}

impl Converter for FallbackConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		display_chain!(
			value, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
			usize, f32, f64,
		);
		String::new()
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		Some(Box::new(text.to_string()))
	}

	fn supports_to_text(&self, _value: &dyn Any, _context: &ConverterContext) -> bool {
		true
	}

	fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
		true
	}
}
