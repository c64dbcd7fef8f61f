use alloc::vec::Vec;

use vc_reflect::ops::AccessError;

/// What a marshal emitted, and which accessors failed along the way.
///
/// Returned by [`Marshaller::marshal_with_report`](crate::Marshaller::marshal_with_report).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarshalReport {
    /// Nodes started (and ended).
    pub nodes: usize,
    /// Attributes added.
    pub attributes: usize,
    /// Texts set.
    pub texts: usize,
    /// The deepest node nesting reached, relative to the node open on entry.
    pub max_depth: usize,
    /// Accessors whose failure was absorbed and rendered as null.
    pub failures: Vec<AccessError>,
}

impl MarshalReport {
    /// Returns `true` if no accessor failed.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
