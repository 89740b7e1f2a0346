//! Type/context converter registry with inheritance-aware resolution.
//!
//! Maps a data type plus an optional named context to a bidirectional
//! text-conversion handler, with fallback resolution across a registered type
//! hierarchy when no exact registration exists. Built to sit under
//! interactive editing widgets: conversion failures are data-level outcomes
//! (`None`, empty string), never escaping errors.
//!
//! # Layout
//!
//! - [`ConverterRegistry`]: constructible two-level store with observers
//! - [`ConverterManager`]: facade adding typed operations, the builtin
//!   converter table and a fallback converter;
//!   [`ConverterManager::global`] is the process-wide default instance
//! - [`builtins`]: the stock converters (numbers, colors, dates, arrays, ...)
//! - [`contexts`]: well-known context names the builtins register under
//!
//! # Example
//!
//! ```
//! use typecast_registry::value::Color;
//! use typecast_registry::{ConverterManager, contexts};
//!
//! let manager = ConverterManager::new();
//! assert_eq!(manager.to_text_in(&Color::rgb(255, 0, 255), &contexts::hex()), "#FF00FF");
//! assert_eq!(manager.from_text_in::<Color>("ff00ff", &contexts::hex()), Some(Color::rgb(255, 0, 255)));
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod builtins;
mod cache;
pub mod contexts;
mod manager;
mod registry;

pub use manager::ConverterManager;
pub use registry::ConverterRegistry;

// Re-export the foundational types so most callers need a single dependency.
pub use typecast_core::{
	ARRAY_SUFFIX, AnyValue, ConvertError, Converter, ConverterContext, Numeric, RegistryEvent,
	RegistryObserver, TypeGraph, TypeKey, value,
};
