//! Change notifications emitted by the registry.

use std::sync::Arc;

use crate::context::ConverterContext;
use crate::converter::Converter;
use crate::graph::TypeKey;

/// A single registry mutation.
///
/// `Added { converter: None }` marks a placeholder registration (an explicit
/// empty slot). `Removed { converter: None }` marks an unregister that found
/// nothing; the notification still fires.
#[derive(Clone)]
pub enum RegistryEvent {
	/// A converter (or placeholder) was inserted or replaced.
	Added {
		key: TypeKey,
		context: ConverterContext,
		converter: Option<Arc<dyn Converter>>,
	},
	/// A registration was removed.
	Removed {
		key: TypeKey,
		context: ConverterContext,
		converter: Option<Arc<dyn Converter>>,
	},
	/// All registrations were dropped at once.
	Cleared,
}

impl std::fmt::Debug for RegistryEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Added { key, context, converter } => f
				.debug_struct("Added")
				.field("key", key)
				.field("context", context)
				.field("converter", &converter.is_some())
				.finish(),
			Self::Removed { key, context, converter } => f
				.debug_struct("Removed")
				.field("key", key)
				.field("context", context)
				.field("converter", &converter.is_some())
				.finish(),
			Self::Cleared => f.write_str("Cleared"),
		}
	}
}

/// Receives registry change notifications.
///
/// Dispatch is synchronous on the mutating thread, newest observer first, from
/// a snapshot taken before iteration; no registry lock is held during the
/// callback, so observers may re-enter the registry.
pub trait RegistryObserver: Send + Sync {
	/// Called once per registry mutation.
	fn on_registry_change(&self, event: &RegistryEvent);
}
