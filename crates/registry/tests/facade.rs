//! Resolution and lifecycle behavior through the manager facade.

#![allow(unused_crate_dependencies)]

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use typecast_registry::{
	Converter, ConverterContext, ConverterManager, Numeric, RegistryEvent, RegistryObserver,
	TypeKey,
};

struct Labeled(&'static str);

impl Converter for Labeled {
	fn to_text(&self, _value: &dyn Any, _context: &ConverterContext) -> String {
		self.0.to_string()
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

fn label_of(converter: &Arc<dyn Converter>) -> String {
	converter.to_text(&(), &ConverterContext::default())
}

struct Widget;
struct Panel;

fn bare_manager() -> ConverterManager {
	let manager = ConverterManager::new();
	manager.set_auto_bootstrap(false);
	manager
}

#[test]
fn exact_registration_wins_over_everything() {
	let manager = bare_manager();
	let ctx = ConverterContext::new("fancy");
	manager.registry().link_supertype_of::<Widget, Panel>();
	manager.register_converter::<Panel>(Arc::new(Labeled("panel")), Some(&ctx));
	manager.register_converter::<Widget>(Arc::new(Labeled("widget")), Some(&ctx));

	let hit = manager.converter_for(TypeKey::of::<Widget>(), Some(&ctx));
	assert_eq!(label_of(&hit), "widget");
}

#[test]
fn placeholder_defers_to_default_context() {
	let manager = bare_manager();
	let ctx = ConverterContext::new("fancy");
	manager.register_converter::<Widget>(Arc::new(Labeled("default")), None);
	manager.register_placeholder::<Widget>(Some(&ctx));

	let hit = manager.converter_for(TypeKey::of::<Widget>(), Some(&ctx));
	assert_eq!(label_of(&hit), "default");
}

#[test]
fn ancestor_with_bucket_short_circuits() {
	struct Leaf;
	struct Mid;
	struct Base;

	let manager = bare_manager();
	let ctx = ConverterContext::new("fancy");
	manager.registry().link_supertype_of::<Leaf, Mid>();
	manager.registry().link_supertype_of::<Mid, Base>();
	// Mid's bucket exists but cannot serve "fancy"; Base could, yet must
	// never be reached.
	manager.register_converter::<Mid>(Arc::new(Labeled("mid")), Some(&ConverterContext::new("other")));
	manager.register_converter::<Base>(Arc::new(Labeled("base")), Some(&ctx));

	assert!(manager.registry().lookup(TypeKey::of::<Leaf>(), Some(&ctx)).is_none());
	// The facade degrades to the fallback converter instead.
	let resolved = manager.converter_for(TypeKey::of::<Leaf>(), Some(&ctx));
	assert!(Arc::ptr_eq(&resolved, manager.fallback()));
}

#[test]
fn marker_links_resolve_like_interfaces() {
	let manager = ConverterManager::new();
	manager.ensure_builtins();
	// Drop the exact i32 registration; the Numeric marker entry takes over.
	manager.unregister_converter::<i32>(None);
	manager.register_converter_for(TypeKey::of::<Numeric>(), Arc::new(Labeled("numeric")), None);

	let hit = manager.converter_for(TypeKey::of::<i32>(), None);
	assert_eq!(label_of(&hit), "numeric");
}

#[test]
fn clear_forgets_all_registrations() {
	let manager = bare_manager();
	let ctx = ConverterContext::new("fancy");
	manager.register_converter::<Widget>(Arc::new(Labeled("widget")), None);
	manager.register_converter::<Widget>(Arc::new(Labeled("fancy")), Some(&ctx));
	manager.unregister_all_converters();

	assert!(manager.registry().lookup(TypeKey::of::<Widget>(), None).is_none());
	assert!(manager.registry().lookup(TypeKey::of::<Widget>(), Some(&ctx)).is_none());
	assert_eq!(manager.registry().registration_count(), 0);
}

#[test]
fn distinct_converters_listed_once() {
	let manager = bare_manager();
	let shared: Arc<dyn Converter> = Arc::new(Labeled("shared"));
	manager.register_converter::<Widget>(shared.clone(), None);
	manager.register_converter::<Panel>(shared, Some(&ConverterContext::new("fancy")));
	manager.register_converter::<Panel>(Arc::new(Labeled("own")), None);

	assert_eq!(manager.registry().converters().len(), 2);
}

#[test]
fn replacement_is_atomic_and_notified() {
	struct CountAdds(Mutex<u32>);

	impl RegistryObserver for CountAdds {
		fn on_registry_change(&self, event: &RegistryEvent) {
			if matches!(event, RegistryEvent::Added { .. }) {
				*self.0.lock() += 1;
			}
		}
	}

	let manager = bare_manager();
	let counter = Arc::new(CountAdds(Mutex::new(0)));
	manager.add_observer(counter.clone());

	manager.register_converter::<Widget>(Arc::new(Labeled("first")), None);
	manager.register_converter::<Widget>(Arc::new(Labeled("second")), None);

	assert_eq!(*counter.0.lock(), 2);
	assert_eq!(manager.registry().registration_count(), 1);
	let hit = manager.converter_for(TypeKey::of::<Widget>(), None);
	assert_eq!(label_of(&hit), "second");
}

#[test]
fn observers_notified_newest_first() {
	struct Push {
		label: &'static str,
		order: Arc<Mutex<Vec<&'static str>>>,
	}

	impl RegistryObserver for Push {
		fn on_registry_change(&self, _event: &RegistryEvent) {
			self.order.lock().push(self.label);
		}
	}

	let manager = bare_manager();
	let order = Arc::new(Mutex::new(Vec::new()));
	manager.add_observer(Arc::new(Push { label: "L1", order: order.clone() }));
	manager.add_observer(Arc::new(Push { label: "L2", order: order.clone() }));

	manager.register_converter::<Widget>(Arc::new(Labeled("w")), None);

	assert_eq!(*order.lock(), vec!["L2", "L1"]);
}
