//! Foundational types for the converter registry.
//!
//! This crate provides the leaf types shared by the registry and by converter
//! authors:
//! - [`ConverterContext`]: named discriminator for multiple converters per type
//! - [`Converter`]: the bidirectional text/value transformation capability
//! - [`TypeKey`] / [`TypeGraph`]: nominal type descriptors and the registered
//!   type-hierarchy table used for ancestor resolution
//! - [`RegistryEvent`] / [`RegistryObserver`]: change notification boundary
//! - [`ConvertError`]: failures surfaced by the fallible typed helpers
//! - [`value`]: plain value types (color, font) used by the builtin converters

mod context;
mod converter;
mod error;
mod event;
mod graph;
pub mod value;

pub use context::{ARRAY_SUFFIX, ConverterContext};
pub use converter::Converter;
pub use error::ConvertError;
pub use event::{RegistryEvent, RegistryObserver};
pub use graph::{AnyValue, Numeric, TypeGraph, TypeKey};
