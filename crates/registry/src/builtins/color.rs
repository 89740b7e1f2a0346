//! Color converters: component lists and hex notation.

use std::any::Any;

use typecast_core::value::Color;
use typecast_core::{Converter, ConverterContext};

/// The text form a [`ColorConverter`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
	/// `"R, G, B"` — alpha dropped on serialize, 255 on parse.
	Rgb,
	/// `"R, G, B, A"`.
	Rgba,
	/// `"#RRGGBB"` — uppercase, zero-padded.
	Hex,
	/// `"#RRGGBBAA"`.
	HexAlpha,
}

/// Converter for [`Color`] in one of the four builtin text forms.
///
/// Parsing is lenient: component lists accept three or four values, hex forms
/// accept upper or lower case with or without the leading `#`, and six or
/// eight digits.
pub struct ColorConverter {
	format: ColorFormat,
}

impl ColorConverter {
	/// Creates a converter for the given format.
	pub fn new(format: ColorFormat) -> Self {
		Self { format }
	}

	fn parse(&self, text: &str) -> Option<Color> {
		match self.format {
			ColorFormat::Rgb | ColorFormat::Rgba => parse_components(text),
			ColorFormat::Hex | ColorFormat::HexAlpha => parse_hex(text),
		}
	}
}

fn parse_components(text: &str) -> Option<Color> {
	let parts: Vec<&str> = text.split(',').map(str::trim).collect();
	if parts.len() != 3 && parts.len() != 4 {
		return None;
	}
	let r: u8 = parts[0].parse().ok()?;
	let g: u8 = parts[1].parse().ok()?;
	let b: u8 = parts[2].parse().ok()?;
	let a: u8 = match parts.get(3) {
		Some(part) => part.parse().ok()?,
		None => 255,
	};
	Some(Color::rgba(r, g, b, a))
}

fn parse_hex(text: &str) -> Option<Color> {
	let digits = text.trim().trim_start_matches('#');
	let value = u32::from_str_radix(digits, 16).ok()?;
	match digits.len() {
		6 => Some(Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)),
		8 => Some(Color::rgba(
			(value >> 24) as u8,
			(value >> 16) as u8,
			(value >> 8) as u8,
			value as u8,
		)),
		_ => None,
	}
}

impl Converter for ColorConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		let Some(color) = value.downcast_ref::<Color>() else {
			return String::new();
		};
		match self.format {
			ColorFormat::Rgb => format!("{}, {}, {}", color.r, color.g, color.b),
			ColorFormat::Rgba => format!("{}, {}, {}, {}", color.r, color.g, color.b, color.a),
			ColorFormat::Hex => format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b),
			ColorFormat::HexAlpha => {
				format!("#{:02X}{:02X}{:02X}{:02X}", color.r, color.g, color.b, color.a)
			}
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		self.parse(text).map(|c| Box::new(c) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<Color>()
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		self.parse(text).is_some()
	}
}
