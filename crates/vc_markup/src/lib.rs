//! Reflection-driven marshalling of object graphs into hierarchical
//! documents.
//!
//! - [`AttributeRegistry`] / [`TypeClassifier`]: decide whether a type is
//!   primitive, and which members render as attributes.
//! - [`Marshaller`]: walks a `&dyn Reflect` and emits [`HierarchicalWriter`]
//!   calls.
//! - [`Converter`]: the seam a serialization driver talks to; the read
//!   direction is a no-op.
//!
//! # Examples
//!
//! ```
//! use vc_markup::{AttributeRegistry, EventWriter, Marshaller, WriterEvent};
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut registry = AttributeRegistry::new();
//! registry.register::<Person>("age");
//!
//! let people = vec![
//!     Person { name: "wubp".into(), age: 29 },
//!     Person { name: "lin".into(), age: 31 },
//! ];
//!
//! let mut writer = EventWriter::new();
//! Marshaller::new(&registry).marshal(&people, &mut writer).unwrap();
//!
//! let persons = writer
//!     .events()
//!     .iter()
//!     .filter(|e| **e == WriterEvent::StartNode("person".into()))
//!     .count();
//! assert_eq!(persons, 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod converter;
mod error;
mod reader;
mod writer;

pub mod classify;
pub mod marshal;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use classify::{AttributeRegistry, TypeClassifier};
pub use config::{ElementNaming, MarshalConfig};
pub use converter::Converter;
pub use error::MarshalError;
pub use marshal::{MarshalReport, Marshaller};
pub use reader::HierarchicalReader;
pub use writer::{EventWriter, HierarchicalWriter, WriterEvent};
