//! Named discriminators for converter registrations.
//!
//! A [`ConverterContext`] distinguishes multiple converters registered for the
//! same data type (e.g. a hex and an RGB rendering of a color). Identity is
//! the name alone; the optional payload rides along for converter authors that
//! want to attach a pre-built collaborator (a formatter, a label table) to the
//! context they hand out.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Suffix marking the array form of a context name.
pub const ARRAY_SUFFIX: &str = "[]";

/// A named discriminator for converter registrations.
///
/// Two contexts are equal iff their names are equal; the payload is ignored.
/// Names are compared case-sensitively with no normalization. The default
/// context (empty name) is the process-wide sentinel for "no specific context
/// requested".
#[derive(Clone)]
pub struct ConverterContext {
	name: Arc<str>,
	payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl ConverterContext {
	/// Creates a context with the given name and no payload.
	pub fn new(name: impl AsRef<str>) -> Self {
		Self {
			name: Arc::from(name.as_ref()),
			payload: None,
		}
	}

	/// Creates a context carrying an opaque payload.
	///
	/// The payload does not participate in equality or hashing.
	pub fn with_payload(name: impl AsRef<str>, payload: Arc<dyn Any + Send + Sync>) -> Self {
		Self {
			name: Arc::from(name.as_ref()),
			payload: Some(payload),
		}
	}

	/// Returns the context name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns true if this is the default (empty-name) context.
	pub fn is_default(&self) -> bool {
		self.name.is_empty()
	}

	/// Returns the opaque payload, if any.
	pub fn payload(&self) -> Option<&(dyn Any + Send + Sync)> {
		self.payload.as_deref()
	}

	/// Returns the payload downcast to a concrete type.
	pub fn payload_as<T: Any>(&self) -> Option<&T> {
		self.payload.as_deref().and_then(|p| p.downcast_ref())
	}

	/// Returns true if the name carries the `"[]"` array suffix.
	pub fn is_array(&self) -> bool {
		self.name.ends_with(ARRAY_SUFFIX)
	}

	/// Returns the element form of this context.
	///
	/// Strips one array suffix if present; otherwise returns self unchanged.
	/// Pure string transform, no registry interaction.
	pub fn element(&self) -> Self {
		match self.name.strip_suffix(ARRAY_SUFFIX) {
			Some(base) => Self {
				name: Arc::from(base),
				payload: self.payload.clone(),
			},
			None => self.clone(),
		}
	}

	/// Returns the array form of this context.
	///
	/// Appends the array suffix unless already present.
	pub fn array(&self) -> Self {
		if self.is_array() {
			self.clone()
		} else {
			Self {
				name: Arc::from(format!("{}{}", self.name, ARRAY_SUFFIX).as_str()),
				payload: self.payload.clone(),
			}
		}
	}
}

impl Default for ConverterContext {
	fn default() -> Self {
		Self::new("")
	}
}

impl PartialEq for ConverterContext {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for ConverterContext {}

impl Hash for ConverterContext {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}

impl fmt::Debug for ConverterContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ConverterContext").field(&self.name).finish()
	}
}

impl fmt::Display for ConverterContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_default() {
			f.write_str("<default>")
		} else {
			f.write_str(&self.name)
		}
	}
}

impl From<&str> for ConverterContext {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}
