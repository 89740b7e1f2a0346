//! The converter registry: storage, resolution and change notification.

use std::any::Any;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use typecast_core::{
	Converter, ConverterContext, RegistryEvent, RegistryObserver, TypeGraph, TypeKey,
};

use crate::cache::ContextCache;

/// A constructible converter registry.
///
/// Stores converters keyed by `(type, context)`, resolves lookups with
/// inheritance-aware fallback over its [`TypeGraph`], and notifies observers
/// of every mutation. All operations are synchronous in-memory map work; reads
/// and writes are serialized per registry by coarse locks. Notifications fire
/// after the locks are released, so observers may re-enter the registry.
pub struct ConverterRegistry {
	cache: RwLock<ContextCache>,
	graph: RwLock<TypeGraph>,
	observers: ArcSwap<Vec<Arc<dyn RegistryObserver>>>,
}

impl ConverterRegistry {
	/// Creates an empty registry with an empty type graph.
	pub fn new() -> Self {
		Self {
			cache: RwLock::new(ContextCache::default()),
			graph: RwLock::new(TypeGraph::new()),
			observers: ArcSwap::from_pointee(Vec::new()),
		}
	}

	/// Inserts or replaces the converter for `(key, context)`.
	///
	/// A missing context means the default context. Registering `None` is
	/// equivalent to [`unregister`](Self::unregister).
	pub fn register(
		&self,
		key: TypeKey,
		converter: Option<Arc<dyn Converter>>,
		context: Option<&ConverterContext>,
	) {
		let context = context.cloned().unwrap_or_default();
		let Some(converter) = converter else {
			self.unregister_in(key, context);
			return;
		};

		self.cache.write().insert(key, context.clone(), Some(converter.clone()));
		tracing::debug!(key = key.name(), context = %context, "registered converter");
		self.notify(&RegistryEvent::Added {
			key,
			context,
			converter: Some(converter),
		});
	}

	/// Stores an explicit placeholder for `(key, context)`.
	///
	/// Lookups hitting the placeholder under a non-default context are
	/// redirected to the default context; under the default context they fail.
	pub fn register_placeholder(&self, key: TypeKey, context: Option<&ConverterContext>) {
		let context = context.cloned().unwrap_or_default();
		self.cache.write().insert(key, context.clone(), None);
		tracing::debug!(key = key.name(), context = %context, "registered placeholder");
		self.notify(&RegistryEvent::Added {
			key,
			context,
			converter: None,
		});
	}

	/// Removes the registration for `(key, context)`.
	///
	/// A removal notification fires even when nothing was registered; its
	/// converter field is `None` in that case.
	pub fn unregister(&self, key: TypeKey, context: Option<&ConverterContext>) {
		self.unregister_in(key, context.cloned().unwrap_or_default());
	}

	fn unregister_in(&self, key: TypeKey, context: ConverterContext) {
		let removed = self.cache.write().remove(key, &context).flatten();
		tracing::debug!(
			key = key.name(),
			context = %context,
			found = removed.is_some(),
			"unregistered converter"
		);
		self.notify(&RegistryEvent::Removed {
			key,
			context,
			converter: removed,
		});
	}

	/// Returns the best-matching converter for `(key, context)`, or `None`.
	///
	/// A missing context means the default context. Never errors; absence is
	/// an expected outcome.
	pub fn lookup(
		&self,
		key: TypeKey,
		context: Option<&ConverterContext>,
	) -> Option<Arc<dyn Converter>> {
		let default_context;
		let context = match context {
			Some(ctx) => ctx,
			None => {
				default_context = ConverterContext::default();
				&default_context
			}
		};
		let graph = self.graph.read();
		self.cache.read().resolve(&graph, key, context)
	}

	/// Drops every registration and emits a single `Cleared` notification.
	pub fn clear(&self) {
		self.cache.write().clear();
		tracing::debug!("cleared converter registry");
		self.notify(&RegistryEvent::Cleared);
	}

	/// Distinct registered converters, order-insensitive.
	pub fn converters(&self) -> Vec<Arc<dyn Converter>> {
		self.cache.read().converters()
	}

	/// Number of occupied `(type, context)` slots.
	pub fn registration_count(&self) -> usize {
		self.cache.read().len()
	}

	/// Links `child` to its supertype in the resolution graph.
	pub fn link_supertype(&self, child: TypeKey, parent: TypeKey) {
		self.graph.write().link_supertype(child, parent);
	}

	/// Links a marker ("interface") key for `ty`.
	pub fn link_marker(&self, ty: TypeKey, marker: TypeKey) {
		self.graph.write().link_marker(ty, marker);
	}

	/// Typed convenience for [`link_supertype`](Self::link_supertype).
	pub fn link_supertype_of<C: Any, P: Any>(&self) {
		self.link_supertype(TypeKey::of::<C>(), TypeKey::of::<P>());
	}

	/// Typed convenience for [`link_marker`](Self::link_marker).
	pub fn link_marker_of<T: Any, M: Any>(&self) {
		self.link_marker(TypeKey::of::<T>(), TypeKey::of::<M>());
	}

	/// Adds an observer. Observers are notified newest-first.
	pub fn add_observer(&self, observer: Arc<dyn RegistryObserver>) {
		self.observers.rcu(|current| {
			let mut next = Vec::with_capacity(current.len() + 1);
			next.extend(current.iter().cloned());
			next.push(observer.clone());
			next
		});
	}

	/// Removes an observer by pointer identity.
	pub fn remove_observer(&self, observer: &Arc<dyn RegistryObserver>) {
		self.observers.rcu(|current| {
			current
				.iter()
				.filter(|existing| !Arc::ptr_eq(existing, observer))
				.cloned()
				.collect::<Vec<_>>()
		});
	}

	/// Dispatches an event to a snapshot of the observer list, LIFO.
	fn notify(&self, event: &RegistryEvent) {
		let snapshot = self.observers.load();
		for observer in snapshot.iter().rev() {
			observer.on_registry_change(event);
		}
	}
}

impl Default for ConverterRegistry {
	fn default() -> Self {
		Self::new()
	}
}
