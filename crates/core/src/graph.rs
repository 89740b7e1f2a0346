//! Type descriptors and the registered type-hierarchy table.
//!
//! Rust has no runtime subtype graph, so ancestor resolution works off an
//! explicit table: callers link a [`TypeKey`] to at most one supertype and any
//! number of ordered marker ("interface") keys. [`TypeGraph::candidates`]
//! flattens that table into the ancestor search order used by converter
//! resolution.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Universal root of the type hierarchy.
///
/// Every key with no registered supertype and no markers resolves against
/// `AnyValue` as its sole ancestor.
pub struct AnyValue;

/// Marker for the numeric family; builtin numeric keys link to it.
pub struct Numeric;

/// A nominal type descriptor: a `TypeId` plus its name for diagnostics.
///
/// Identity (equality, hashing) is the `TypeId` alone.
#[derive(Clone, Copy)]
pub struct TypeKey {
	id: TypeId,
	name: &'static str,
}

impl TypeKey {
	/// Returns the key for a concrete type.
	pub fn of<T: Any + ?Sized>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	/// Returns the universal root key.
	pub fn any() -> Self {
		Self::of::<AnyValue>()
	}

	/// Returns the type name this key was created from.
	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for TypeKey {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for TypeKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TypeKey").field(&self.name).finish()
	}
}

/// Registered type-hierarchy table.
///
/// Stands in for reflection: each key may have one supertype (last link wins)
/// and an ordered, de-duplicated list of marker keys.
#[derive(Default)]
pub struct TypeGraph {
	supertypes: HashMap<TypeKey, TypeKey>,
	markers: HashMap<TypeKey, Vec<TypeKey>>,
}

impl TypeGraph {
	/// Creates an empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Links `child` to its supertype. A later link for the same child
	/// replaces the earlier one.
	pub fn link_supertype(&mut self, child: TypeKey, parent: TypeKey) {
		debug_assert_ne!(child, parent, "type linked as its own supertype");
		self.supertypes.insert(child, parent);
	}

	/// Appends a marker key for `ty`, preserving link order. Duplicate links
	/// are ignored.
	pub fn link_marker(&mut self, ty: TypeKey, marker: TypeKey) {
		let markers = self.markers.entry(ty).or_default();
		if !markers.contains(&marker) {
			markers.push(marker);
		}
	}

	/// Returns the registered supertype of `ty`, if any.
	pub fn supertype_of(&self, ty: TypeKey) -> Option<TypeKey> {
		self.supertypes.get(&ty).copied()
	}

	/// Returns the markers registered for `ty`, in link order.
	pub fn markers_of(&self, ty: TypeKey) -> &[TypeKey] {
		self.markers.get(&ty).map_or(&[], Vec::as_slice)
	}

	/// Builds the ancestor search order for `ty`.
	///
	/// Direct markers of `ty` first, then each supertype up the chain followed
	/// by that supertype's own direct markers. A key with no links at all gets
	/// `[TypeKey::any()]`. The walk tolerates accidental supertype cycles by
	/// stopping at the first repeated key.
	pub fn candidates(&self, ty: TypeKey) -> Vec<TypeKey> {
		let mut out = Vec::new();
		out.extend_from_slice(self.markers_of(ty));

		let mut seen: HashSet<TypeKey> = HashSet::new();
		seen.insert(ty);
		let mut cur = ty;
		while let Some(parent) = self.supertype_of(cur) {
			if !seen.insert(parent) {
				break;
			}
			out.push(parent);
			out.extend_from_slice(self.markers_of(parent));
			cur = parent;
		}

		if out.is_empty() {
			out.push(TypeKey::any());
		}
		out
	}
}
