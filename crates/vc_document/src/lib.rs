//! In-memory document trees for the output of a
//! [`Marshaller`](vc_markup::Marshaller), and their XML and JSON text forms.
//!
//! # Examples
//!
//! ```
//! use vc_document::{Format, render_xml, to_tree};
//! use vc_markup::{AttributeRegistry, Marshaller};
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
//! let people = vec![Person { name: "wubp".into(), age: 29 }];
//! let tree = to_tree(&Marshaller::new(&registry), &people, "list").unwrap();
//!
//! assert_eq!(
//!     render_xml(&tree, &Format::compact()),
//!     r#"<list><person age="29"><name>wubp</name></person></list>"#,
//! );
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

mod error;
mod format;
mod node;
mod tree_reader;
mod tree_writer;
mod xml;

#[cfg(feature = "std")]
mod json;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::{DocumentError, WriterError};
pub use format::{EmptyElement, Format, JsonFormat};
pub use node::{Node, NodeContent};
pub use tree_reader::TreeReader;
pub use tree_writer::TreeWriter;
pub use xml::{render_xml, write_xml};

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use json::render_json;

use vc_markup::Marshaller;
use vc_reflect::Reflect;

/// Marshals `value` into a tree whose root node is named `root`.
///
/// # Errors
///
/// [`DocumentError::Marshal`] if the marshal gives up, or
/// [`DocumentError::Writer`] if the emitted calls do not form a tree.
pub fn to_tree(
    marshaller: &Marshaller<'_>,
    value: &dyn Reflect,
    root: &str,
) -> Result<Node, DocumentError> {
    let mut writer = TreeWriter::new(root);
    marshaller.marshal(value, &mut writer)?;
    Ok(writer.finish()?)
}

// -----------------------------------------------------------------------------
// Tests
