//! Well-known context names used by the builtin converters.

use typecast_core::ConverterContext;

/// `"R, G, B, A"` color rendering.
pub fn rgba() -> ConverterContext {
	ConverterContext::new("rgba")
}

/// `"#RRGGBB"` color rendering.
pub fn hex() -> ConverterContext {
	ConverterContext::new("hex")
}

/// `"#RRGGBBAA"` color rendering.
pub fn hex_alpha() -> ConverterContext {
	ConverterContext::new("hex-alpha")
}

/// Fractions rendered as percentages.
pub fn percent() -> ConverterContext {
	ConverterContext::new("percent")
}

/// Monetary amounts with symbol and grouping.
pub fn currency() -> ConverterContext {
	ConverterContext::new("currency")
}

/// Multi-line text editing.
pub fn multiline() -> ConverterContext {
	ConverterContext::new("multiline")
}

/// Masked password rendering.
pub fn password() -> ConverterContext {
	ConverterContext::new("password")
}
