//! Font description value.

use bitflags::bitflags;

bitflags! {
	/// Style flags for a font face.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct FontStyle: u8 {
		/// Bold weight.
		const BOLD = 1 << 0;
		/// Italic slant.
		const ITALIC = 1 << 1;
	}
}

impl FontStyle {
	/// Returns the canonical text label for this style combination.
	pub fn label(self) -> &'static str {
		match (self.contains(Self::BOLD), self.contains(Self::ITALIC)) {
			(false, false) => "plain",
			(true, false) => "bold",
			(false, true) => "italic",
			(true, true) => "bold italic",
		}
	}

	/// Parses a style label, case-insensitively.
	pub fn from_label(label: &str) -> Option<Self> {
		match label.trim().to_ascii_lowercase().as_str() {
			"plain" | "" => Some(Self::empty()),
			"bold" => Some(Self::BOLD),
			"italic" => Some(Self::ITALIC),
			"bold italic" | "bolditalic" => Some(Self::BOLD | Self::ITALIC),
			_ => None,
		}
	}
}

/// A font request: family name, style and point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
	/// Family name, e.g. `"Sans"`.
	pub family: String,
	/// Style flags.
	pub style: FontStyle,
	/// Point size.
	pub size: f32,
}

impl FontSpec {
	/// Creates a plain-style font spec.
	pub fn new(family: impl Into<String>, size: f32) -> Self {
		Self {
			family: family.into(),
			style: FontStyle::empty(),
			size,
		}
	}

	/// Sets the style flags.
	pub fn with_style(mut self, style: FontStyle) -> Self {
		self.style = style;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn style_labels_round_trip() {
		for style in [
			FontStyle::empty(),
			FontStyle::BOLD,
			FontStyle::ITALIC,
			FontStyle::BOLD | FontStyle::ITALIC,
		] {
			assert_eq!(FontStyle::from_label(style.label()), Some(style));
		}
	}

	#[test]
	fn style_label_parse_is_lenient() {
		assert_eq!(FontStyle::from_label("Bold"), Some(FontStyle::BOLD));
		assert_eq!(FontStyle::from_label(" BOLD ITALIC "), Some(FontStyle::BOLD | FontStyle::ITALIC));
		assert_eq!(FontStyle::from_label("wavy"), None);
	}
}
