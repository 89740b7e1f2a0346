//! Process-wide default manager instance.
//!
//! These tests share the global registry, so they run serially and undo
//! whatever they register.

#![allow(unused_crate_dependencies)]

use std::any::Any;
use std::sync::Arc;

use serial_test::serial;
use typecast_registry::{Converter, ConverterContext, ConverterManager};

struct Badge;

struct BadgeConverter;

impl Converter for BadgeConverter {
	fn to_text(&self, value: &dyn Any, _context: &ConverterContext) -> String {
		if value.is::<Badge>() { "badge".to_string() } else { String::new() }
	}

	fn from_text(&self, text: &str, _context: &ConverterContext) -> Option<Box<dyn Any + Send>> {
		(text == "badge").then(|| Box::new(Badge) as Box<dyn Any + Send>)
	}

	fn supports_to_text(&self, value: &dyn Any, _context: &ConverterContext) -> bool {
		value.is::<Badge>()
	}

	fn supports_from_text(&self, text: &str, _context: &ConverterContext) -> bool {
		text == "badge"
	}
}

#[test]
#[serial]
fn global_instance_is_bootstrapped_on_first_use() {
	let manager = ConverterManager::global();
	assert_eq!(manager.to_text(&123_i64), "123");
	assert_eq!(manager.from_text::<bool>("TRUE"), Some(true));
}

#[test]
#[serial]
fn global_registrations_are_visible_everywhere() {
	let manager = ConverterManager::global();
	manager.register_converter::<Badge>(Arc::new(BadgeConverter), None);

	assert_eq!(ConverterManager::global().to_text(&Badge), "badge");
	assert!(ConverterManager::global().from_text::<Badge>("badge").is_some());

	manager.unregister_converter::<Badge>(None);
	assert_eq!(manager.to_text(&Badge), "");
}
