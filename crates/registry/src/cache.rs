//! Two-level converter storage and the fallback resolution algorithm.
//!
//! Converters are keyed first by [`TypeKey`], second by [`ConverterContext`].
//! A context slot may hold an explicit placeholder (`None`), which redirects
//! lookups under that context to the default context. Unregistering a context
//! leaves the type bucket in place as an empty bucket; empty buckets still
//! terminate the ancestor walk.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use typecast_core::{Converter, ConverterContext, TypeGraph, TypeKey};

/// A context slot: a converter, or an explicit placeholder.
pub(crate) type Slot = Option<Arc<dyn Converter>>;

/// The two-level `type -> context -> converter` store.
#[derive(Default)]
pub(crate) struct ContextCache {
	buckets: FxHashMap<TypeKey, FxHashMap<ConverterContext, Slot>>,
}

impl ContextCache {
	/// Inserts or replaces a slot, creating the type bucket on first use.
	pub fn insert(&mut self, key: TypeKey, context: ConverterContext, slot: Slot) -> Option<Slot> {
		self.buckets.entry(key).or_default().insert(context, slot)
	}

	/// Removes a slot. The type bucket is retained even when it becomes
	/// empty; only [`clear`](Self::clear) drops buckets.
	pub fn remove(&mut self, key: TypeKey, context: &ConverterContext) -> Option<Slot> {
		self.buckets.get_mut(&key)?.remove(context)
	}

	/// Drops every bucket.
	pub fn clear(&mut self) {
		self.buckets.clear();
	}

	/// Number of occupied context slots across all buckets.
	pub fn len(&self) -> usize {
		self.buckets.values().map(|bucket| bucket.len()).sum()
	}

	/// Finds the best-matching converter for `(key, context)`.
	///
	/// The exact bucket takes priority whenever it holds a slot for the
	/// requested context, placeholder included: a placeholder under a
	/// non-default context retries the same key under the default context, a
	/// placeholder under the default context fails outright without entering
	/// the ancestor walk.
	///
	/// The ancestor walk visits `graph.candidates(key)` in order and stops at
	/// the first candidate that has a bucket at all, empty or not. Only that
	/// candidate's slot for the requested context (or, for a placeholder, the
	/// candidate's default context) can produce a converter; later candidates
	/// are never consulted. The asymmetry with the exact-match path above is
	/// deliberate, contract-level behavior.
	pub fn resolve(
		&self,
		graph: &TypeGraph,
		key: TypeKey,
		context: &ConverterContext,
	) -> Option<Arc<dyn Converter>> {
		if let Some(bucket) = self.buckets.get(&key) {
			if let Some(slot) = bucket.get(context) {
				return match slot {
					Some(converter) => Some(converter.clone()),
					None if !context.is_default() => {
						self.resolve(graph, key, &ConverterContext::default())
					}
					None => None,
				};
			}
		}

		for candidate in graph.candidates(key) {
			let Some(bucket) = self.buckets.get(&candidate) else {
				continue;
			};
			// First candidate with any bucket decides the outcome.
			return match bucket.get(context) {
				Some(Some(converter)) => Some(converter.clone()),
				Some(None) if !context.is_default() => {
					self.resolve(graph, candidate, &ConverterContext::default())
				}
				_ => None,
			};
		}

		None
	}

	/// Distinct registered converters, de-duplicated by pointer identity.
	pub fn converters(&self) -> Vec<Arc<dyn Converter>> {
		let mut out: Vec<Arc<dyn Converter>> = Vec::new();
		for bucket in self.buckets.values() {
			for slot in bucket.values() {
				if let Some(converter) = slot {
					if !out.iter().any(|seen| Arc::ptr_eq(seen, converter)) {
						out.push(converter.clone());
					}
				}
			}
		}
		out
	}
}
