//! RGBA color value.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel; 255 is fully opaque.
	pub a: u8,
}

impl Color {
	/// Creates a fully opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 255 }
	}

	/// Creates a color with an explicit alpha channel.
	pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Returns true if the color is fully opaque.
	pub const fn is_opaque(&self) -> bool {
		self.a == 255
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::rgb(0, 0, 0)
	}
}
