//! Marshal reflected object graphs into hierarchical documents.
//!
//! - [`reflect`]: runtime type descriptions and member access, with
//!   `#[derive(Reflect)]`.
//! - [`markup`]: the attribute registry, type classification and the
//!   [`Marshaller`](markup::Marshaller) that drives a
//!   [`HierarchicalWriter`](markup::HierarchicalWriter).
//! - [`document`]: in-memory trees and their XML and JSON text forms.
//! - [`utils`]: hash maps keyed by `TypeId`.
//!
//! # Examples
//!
//! ```
//! use vc_marshal::document::{Format, render_xml, to_tree};
//! use vc_marshal::markup::{AttributeRegistry, Marshaller};
//! use vc_marshal::reflect::derive::Reflect;
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
//! let tree = to_tree(&Marshaller::new(&registry), &people, "list").unwrap();
//!
//! assert_eq!(
//!     render_xml(&tree, &Format::compact()),
//!     concat!(
//!         "<list>",
//!         r#"<person age="29"><name>wubp</name></person>"#,
//!         r#"<person age="31"><name>lin</name></person>"#,
//!         "</list>",
//!     ),
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_document as document;
pub use vc_markup as markup;
pub use vc_reflect as reflect;
pub use vc_utils as utils;
