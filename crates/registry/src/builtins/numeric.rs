//! Converters for the numeric family.

use std::any::Any;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use typecast_core::{Converter, ConverterContext};

/// Plain number converter: `Display` out, trimmed `FromStr` in.
pub struct NumberConverter<T> {
	_marker: PhantomData<fn() -> T>,
}

impl<T> NumberConverter<T> {
	/// Creates the converter.
	pub fn new() -> Self {
		Self { _marker: PhantomData }
	}
}

impl<T> Default for NumberConverter<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Converter for NumberConverter<T>
where
	T: FromStr + Display + Copy + Send + Sync + 'static,
{
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		value.downcast_ref::<T>().map(T::to_string).unwrap_or_default()
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		let parsed: T = text.trim().parse().ok()?;
		Some(Box::new(parsed))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<T>()
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		text.trim().parse::<T>().is_ok()
	}
}

/// Float values the percent converter can carry.
pub trait FloatValue: Copy + Send + Sync + 'static {
	/// Widens to `f64`.
	fn to_f64(self) -> f64;
	/// Narrows from `f64`.
	fn from_f64(value: f64) -> Self;
}

impl FloatValue for f64 {
	fn to_f64(self) -> f64 {
		self
	}

	fn from_f64(value: f64) -> Self {
		value
	}
}

impl FloatValue for f32 {
	fn to_f64(self) -> f64 {
		self as f64
	}

	fn from_f64(value: f64) -> Self {
		value as f32
	}
}

/// Renders a fraction as a percentage: `0.125` ⇔ `"12.50%"`.
pub struct PercentConverter<T> {
	places: usize,
	_marker: PhantomData<fn() -> T>,
}

impl<T> PercentConverter<T> {
	/// Creates a converter with two decimal places.
	pub fn new() -> Self {
		Self::with_places(2)
	}

	/// Creates a converter with a fixed number of decimal places.
	pub fn with_places(places: usize) -> Self {
		Self { places, _marker: PhantomData }
	}
}

impl<T> Default for PercentConverter<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: FloatValue> Converter for PercentConverter<T> {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<T>() {
			Some(v) => format!("{:.*}%", self.places, v.to_f64() * 100.0),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		let stripped = text.trim().strip_suffix('%').unwrap_or(text.trim());
		let parsed: f64 = stripped.trim().parse().ok()?;
		Some(Box::new(T::from_f64(parsed / 100.0)))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<T>()
	}

	fn supports_from_text(&self, text: &str, context: &ConverterContext) -> bool {
		self.from_text(text, context).is_some()
	}
}

/// Renders an amount with a currency symbol and thousands grouping:
/// `1234.5` ⇔ `"$1,234.50"`.
pub struct CurrencyConverter {
	symbol: String,
}

impl CurrencyConverter {
	/// Creates a converter using the `"$"` symbol.
	pub fn new() -> Self {
		Self::with_symbol("$")
	}

	/// Creates a converter with a custom symbol prefix.
	pub fn with_symbol(symbol: impl Into<String>) -> Self {
		Self { symbol: symbol.into() }
	}

	fn format_amount(&self, amount: f64) -> String {
		let negative = amount < 0.0;
		let fixed = format!("{:.2}", amount.abs());
		let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

		let mut grouped = String::new();
		let digits = int_part.as_bytes();
		for (i, digit) in digits.iter().enumerate() {
			if i > 0 && (digits.len() - i) % 3 == 0 {
				grouped.push(',');
			}
			grouped.push(*digit as char);
		}

		let sign = if negative { "-" } else { "" };
		format!("{}{}{}.{}", sign, self.symbol, grouped, frac_part)
	}
}

impl Default for CurrencyConverter {
	fn default() -> Self {
		Self::new()
	}
}

impl Converter for CurrencyConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		match value.downcast_ref::<f64>() {
			Some(v) => self.format_amount(*v),
			None => String::new(),
		}
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		let mut cleaned = text.trim();
		let negative = cleaned.starts_with('-');
		cleaned = cleaned.trim_start_matches('-').trim_start();
		cleaned = cleaned.strip_prefix(self.symbol.as_str()).unwrap_or(cleaned);
		let plain: String = cleaned.chars().filter(|c| *c != ',').collect();
		let amount: f64 = plain.trim().parse().ok()?;
		Some(Box::new(if negative { -amount } else { amount }))
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<f64>()
	}

	fn supports_from_text(&self, text: &str, context: &ConverterContext) -> bool {
		self.from_text(text, context).is_some()
	}
}
