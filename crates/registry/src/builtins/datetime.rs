//! Date and time converters backed by chrono format strings.

use std::any::Any;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use typecast_core::{Converter, ConverterContext};

macro_rules! chrono_converter {
	($(#[$doc:meta])* $name:ident, $ty:ty, $default_format:expr) => {
		$(#[$doc])*
		pub struct $name {
			format: String,
		}

		impl $name {
			/// Creates a converter with the default format string.
			pub fn new() -> Self {
				Self::with_format($default_format)
			}

			/// Creates a converter with a custom chrono format string.
			pub fn with_format(format: impl Into<String>) -> Self {
				Self { format: format.into() }
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::new()
			}
		}

		impl Converter for $name {
			fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
				match value.downcast_ref::<$ty>() {
					Some(v) => v.format(&self.format).to_string(),
					None => String::new(),
				}
			}

			fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
				let parsed = <$ty>::parse_from_str(text.trim(), &self.format).ok()?;
				Some(Box::new(parsed))
			}

			fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
				value.is::<$ty>()
			}

			fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
				<$ty>::parse_from_str(text.trim(), &self.format).is_ok()
			}
		}
	};
}

chrono_converter!(
	/// `NaiveDate` as `"%Y-%m-%d"`.
	DateConverter,
	NaiveDate,
	"%Y-%m-%d"
);

chrono_converter!(
	/// `NaiveTime` as `"%H:%M:%S"`.
	TimeConverter,
	NaiveTime,
	"%H:%M:%S"
);

chrono_converter!(
	/// `NaiveDateTime` as `"%Y-%m-%d %H:%M:%S"`.
	DateTimeConverter,
	NaiveDateTime,
	"%Y-%m-%d %H:%M:%S"
);
