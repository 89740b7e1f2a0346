//! Font spec converter.

use std::any::Any;

use typecast_core::value::{FontSpec, FontStyle};
use typecast_core::{Converter, ConverterContext};

/// [`FontSpec`] as `"Family, style, size"`.
///
/// Family names may themselves contain commas; the style and size are taken
/// from the last two comma-separated fields and the rest is the family.
pub struct FontConverter;

impl FontConverter {
	fn parse(text: &str) -> Option<FontSpec> {
		let parts: Vec<&str> = text.split(',').collect();
		if parts.len() < 3 {
			return None;
		}
		let size: f32 = parts[parts.len() - 1].trim().parse().ok()?;
		if !size.is_finite() || size <= 0.0 {
			return None;
		}
		let style = FontStyle::from_label(parts[parts.len() - 2])?;
		let family = parts[..parts.len() - 2].join(",").trim().to_string();
		if family.is_empty() {
			return None;
		}
		Some(FontSpec::new(family, size).with_style(style))
	}
}

impl Converter for FontConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<FontSpec>() {
			Some(font) => format!("{}, {}, {}", font.family, font.style.label(), font.size),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		Self::parse(text).map(|f| Box::new(f) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<FontSpec>()
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		Self::parse(text).is_some()
	}
}
