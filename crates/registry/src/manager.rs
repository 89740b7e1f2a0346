//! The converter manager: registry facade, bootstrap, typed conversions.

use std::any::Any;
use std::cell::Cell;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::ReentrantMutex;
use typecast_core::{
	ConvertError, Converter, ConverterContext, RegistryObserver, TypeKey,
};

use crate::builtins;
use crate::builtins::fallback::FallbackConverter;
use crate::registry::ConverterRegistry;

/// Bootstrap progress for one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootstrapState {
	Uninitialized,
	Initializing,
	Initialized,
}

/// Facade over a [`ConverterRegistry`]: typed register/lookup/convert
/// operations, lazy installation of the builtin converter table, and a
/// fallback converter for lookups that find nothing.
///
/// Managers are plain constructible values; tests build fresh ones with no
/// cross-test leakage. [`ConverterManager::global`] exposes the single
/// process-wide instance for application code.
pub struct ConverterManager {
	registry: ConverterRegistry,
	fallback: Arc<dyn Converter>,
	// Reentrant so registrations made by the bootstrap pass itself skip the
	// trigger instead of deadlocking; other threads block here until the
	// builtin table is fully installed.
	bootstrap: ReentrantMutex<Cell<BootstrapState>>,
	auto_bootstrap: AtomicBool,
}

static GLOBAL: LazyLock<ConverterManager> = LazyLock::new(ConverterManager::new);

impl ConverterManager {
	/// Creates a manager with an empty registry, auto-bootstrap enabled and
	/// the stock fallback converter.
	pub fn new() -> Self {
		Self::with_fallback(Arc::new(FallbackConverter))
	}

	/// Creates a manager with a custom fallback converter.
	pub fn with_fallback(fallback: Arc<dyn Converter>) -> Self {
		Self {
			registry: ConverterRegistry::new(),
			fallback,
			bootstrap: ReentrantMutex::new(Cell::new(BootstrapState::Uninitialized)),
			auto_bootstrap: AtomicBool::new(true),
		}
	}

	/// Returns the process-wide default manager.
	pub fn global() -> &'static ConverterManager {
		&GLOBAL
	}

	/// Returns the underlying registry.
	pub fn registry(&self) -> &ConverterRegistry {
		&self.registry
	}

	/// Returns the fallback converter.
	pub fn fallback(&self) -> &Arc<dyn Converter> {
		&self.fallback
	}

	/// Enables or disables automatic bootstrap on first use.
	pub fn set_auto_bootstrap(&self, enabled: bool) {
		self.auto_bootstrap.store(enabled, Ordering::Relaxed);
	}

	/// Installs the builtin converter table exactly once.
	///
	/// Idempotent; a call made from within the installation pass itself (the
	/// builtins register through this manager) is a no-op rather than a
	/// recursive trigger. Concurrent first-use from another thread blocks
	/// until installation completes.
	pub fn ensure_builtins(&self) {
		let state = self.bootstrap.lock();
		if state.get() == BootstrapState::Uninitialized {
			state.set(BootstrapState::Initializing);
			tracing::debug!("installing builtin converters");
			builtins::install(self);
			state.set(BootstrapState::Initialized);
		}
	}

	/// Allows the next triggering call to re-run the builtin installation.
	///
	/// Only flips the completed flag; registry contents are untouched. An
	/// in-progress installation pass cannot be interrupted.
	pub fn reset_bootstrap(&self) {
		let state = self.bootstrap.lock();
		if state.get() == BootstrapState::Initialized {
			state.set(BootstrapState::Uninitialized);
		}
	}

	fn maybe_bootstrap(&self) {
		if self.auto_bootstrap.load(Ordering::Relaxed) {
			self.ensure_builtins();
		}
	}

	/// Registers a converter for `T` under the given context (default context
	/// when `None`).
	pub fn register_converter<T: Any>(
		&self,
		converter: Arc<dyn Converter>,
		context: Option<&ConverterContext>,
	) {
		self.register_converter_for(TypeKey::of::<T>(), converter, context);
	}

	/// Registers a converter for an explicit type key.
	pub fn register_converter_for(
		&self,
		key: TypeKey,
		converter: Arc<dyn Converter>,
		context: Option<&ConverterContext>,
	) {
		self.maybe_bootstrap();
		self.registry.register(key, Some(converter), context);
	}

	/// Stores an explicit placeholder for `(T, context)`; lookups hitting it
	/// defer to the default context.
	pub fn register_placeholder<T: Any>(&self, context: Option<&ConverterContext>) {
		self.register_placeholder_for(TypeKey::of::<T>(), context);
	}

	/// Stores an explicit placeholder for an explicit type key.
	pub fn register_placeholder_for(&self, key: TypeKey, context: Option<&ConverterContext>) {
		self.maybe_bootstrap();
		self.registry.register_placeholder(key, context);
	}

	/// Removes the registration for `(T, context)`.
	pub fn unregister_converter<T: Any>(&self, context: Option<&ConverterContext>) {
		self.unregister_converter_for(TypeKey::of::<T>(), context);
	}

	/// Removes the registration for an explicit type key.
	pub fn unregister_converter_for(&self, key: TypeKey, context: Option<&ConverterContext>) {
		self.maybe_bootstrap();
		self.registry.unregister(key, context);
	}

	/// Drops every registration.
	///
	/// The bootstrap-completed flag is untouched: builtins do not reinstall
	/// on the next use unless [`reset_bootstrap`](Self::reset_bootstrap) is
	/// called.
	pub fn unregister_all_converters(&self) {
		self.registry.clear();
	}

	/// Resolves the converter for `(key, context)`, falling back to the
	/// manager's fallback converter. Never absent.
	pub fn converter_for(
		&self,
		key: TypeKey,
		context: Option<&ConverterContext>,
	) -> Arc<dyn Converter> {
		self.maybe_bootstrap();
		self.registry
			.lookup(key, context)
			.unwrap_or_else(|| self.fallback.clone())
	}

	/// Resolves the converter for `T` under the default context.
	pub fn converter<T: Any>(&self) -> Arc<dyn Converter> {
		self.converter_for(TypeKey::of::<T>(), None)
	}

	/// Serializes a value with a dynamically-chosen type key.
	///
	/// When the resolved converter does not support the value, the fallback
	/// converter renders it instead (empty string for types it does not know).
	pub fn to_text_dyn(
		&self,
		value: &dyn Any,
		key: TypeKey,
		context: Option<&ConverterContext>,
	) -> String {
		let owned_default;
		let context = match context {
			Some(ctx) => ctx,
			None => {
				owned_default = ConverterContext::default();
				&owned_default
			}
		};
		let converter = self.converter_for(key, Some(context));
		if converter.supports_to_text(value, context) {
			converter.to_text(value, context)
		} else {
			self.fallback.to_text(value, context)
		}
	}

	/// Serializes a value under the default context.
	pub fn to_text<T: Any>(&self, value: &T) -> String {
		self.to_text_dyn(value, TypeKey::of::<T>(), None)
	}

	/// Serializes a value under an explicit context.
	pub fn to_text_in<T: Any>(&self, value: &T, context: &ConverterContext) -> String {
		self.to_text_dyn(value, TypeKey::of::<T>(), Some(context))
	}

	/// Deserializes text with a dynamically-chosen type key.
	pub fn from_text_dyn(
		&self,
		text: &str,
		key: TypeKey,
		context: Option<&ConverterContext>,
	) -> Option<Box<dyn Any + Send>> {
		let owned_default;
		let context = match context {
			Some(ctx) => ctx,
			None => {
				owned_default = ConverterContext::default();
				&owned_default
			}
		};
		let converter = self.converter_for(key, Some(context));
		if converter.supports_from_text(text, context) {
			converter.from_text(text, context)
		} else {
			None
		}
	}

	/// Deserializes text into `T`, distinguishing parse failures from
	/// converter bugs.
	pub fn try_from_text<T: Any + Send>(
		&self,
		text: &str,
		context: Option<&ConverterContext>,
	) -> Result<T, ConvertError> {
		let boxed = self
			.from_text_dyn(text, TypeKey::of::<T>(), context)
			.ok_or(ConvertError::Unparsable { type_name: std::any::type_name::<T>() })?;
		boxed
			.downcast::<T>()
			.map(|b| *b)
			.map_err(|_| ConvertError::TypeMismatch { expected: std::any::type_name::<T>() })
	}

	/// Deserializes text into `T` under the default context.
	pub fn from_text<T: Any + Send>(&self, text: &str) -> Option<T> {
		self.try_from_text(text, None).ok()
	}

	/// Deserializes text into `T` under an explicit context.
	pub fn from_text_in<T: Any + Send>(&self, text: &str, context: &ConverterContext) -> Option<T> {
		self.try_from_text(text, Some(context)).ok()
	}

	/// Adds a registry observer.
	pub fn add_observer(&self, observer: Arc<dyn RegistryObserver>) {
		self.registry.add_observer(observer);
	}

	/// Removes a registry observer by pointer identity.
	pub fn remove_observer(&self, observer: &Arc<dyn RegistryObserver>) {
		self.registry.remove_observer(observer);
	}
}

impl Default for ConverterManager {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Quiet;

	impl Converter for Quiet {
		fn to_text(&self, _value: &dyn Any, _context: &ConverterContext) -> String {
			"quiet".to_string()
		}

		fn from_text(&self, _text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
			None
		}

		fn supports_to_text(&self, _value: &dyn Any, _context: &ConverterContext) -> bool {
			true
		}

		fn supports_from_text(&self, _text: &str, _context: &ConverterContext) -> bool {
			false
		}
	}

	#[test]
	fn bootstrap_runs_once() {
		let manager = ConverterManager::new();
		manager.ensure_builtins();
		let count = manager.registry().registration_count();
		assert!(count > 0);

		manager.ensure_builtins();
		assert_eq!(manager.registry().registration_count(), count);
	}

	#[test]
	fn first_use_triggers_bootstrap() {
		let manager = ConverterManager::new();
		assert_eq!(manager.to_text(&42_i32), "42");
		assert!(manager.registry().registration_count() > 0);
	}

	#[test]
	fn disabled_auto_bootstrap_stays_empty() {
		let manager = ConverterManager::new();
		manager.set_auto_bootstrap(false);
		// Falls through to the fallback converter's display chain.
		assert_eq!(manager.to_text(&42_i32), "42");
		assert_eq!(manager.registry().registration_count(), 0);
	}

	#[test]
	fn unregister_all_does_not_rebootstrap() {
		let manager = ConverterManager::new();
		manager.ensure_builtins();
		manager.unregister_all_converters();

		// Lookup goes to the fallback; the builtin table is not reinstalled.
		manager.converter_for(TypeKey::of::<i32>(), None);
		assert_eq!(manager.registry().registration_count(), 0);
	}

	#[test]
	fn reset_allows_rebootstrap() {
		let manager = ConverterManager::new();
		manager.ensure_builtins();
		let count = manager.registry().registration_count();

		manager.unregister_all_converters();
		manager.reset_bootstrap();
		manager.converter_for(TypeKey::of::<i32>(), None);

		assert_eq!(manager.registry().registration_count(), count);
	}

	#[test]
	fn fallback_converter_is_returned_for_unknown_types() {
		struct Unknown;

		let manager = ConverterManager::new();
		let converter = manager.converter::<Unknown>();
		assert!(Arc::ptr_eq(&converter, manager.fallback()));
		assert_eq!(manager.to_text(&Unknown), "");
	}

	#[test]
	fn custom_fallback_is_used() {
		struct Unknown;

		let manager = ConverterManager::with_fallback(Arc::new(Quiet));
		manager.set_auto_bootstrap(false);
		assert_eq!(manager.to_text(&Unknown), "quiet");
	}

	#[test]
	fn try_from_text_reports_type_mismatch() {
		#[derive(Debug)]
		struct Unknown;

		let manager = ConverterManager::new();
		manager.ensure_builtins();
		// The fallback hands back a String box; requesting Unknown is a
		// mismatch, not a parse failure.
		let err = manager.try_from_text::<Unknown>("anything", None).unwrap_err();
		assert!(matches!(err, ConvertError::TypeMismatch { .. }));
	}

	#[test]
	fn try_from_text_reports_unparsable() {
		let manager = ConverterManager::new();
		let err = manager.try_from_text::<i32>("not a number", None).unwrap_err();
		assert!(matches!(err, ConvertError::Unparsable { .. }));
	}

	#[test]
	fn concurrent_first_use_installs_once() {
		let manager = Arc::new(ConverterManager::new());
		let threads: Vec<_> = (0..8)
			.map(|_| {
				let manager = manager.clone();
				std::thread::spawn(move || manager.to_text(&1_i32))
			})
			.collect();
		for thread in threads {
			assert_eq!(thread.join().unwrap(), "1");
		}

		let count = manager.registry().registration_count();
		manager.ensure_builtins();
		assert_eq!(manager.registry().registration_count(), count);
	}
}
