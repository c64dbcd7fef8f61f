//! Small shared containers for the `vc_marshal` crates.
//!
//! - [`TypeIdMap`]: a map keyed by exact [`TypeId`](core::any::TypeId).
//! - [`hash`]: `hashbrown` containers with fixed, deterministic hashers.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
