use alloc::borrow::Cow;

use thiserror::Error;

/// An error returned when invoking a struct member's accessor.
///
/// Derived accessors only fail with [`AccessError::OutOfRange`].
/// Hand-written accessors report their own failures with
/// [`AccessError::failed`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("`{type_path}` has no accessor at index {index}")]
    OutOfRange {
        type_path: &'static str,
        index: usize,
    },

    #[error("accessor `{accessor}` of `{type_path}` failed: {reason}")]
    Failed {
        type_path: &'static str,
        accessor: &'static str,
        reason: Cow<'static, str>,
    },
}

impl AccessError {
    /// Creates an [`AccessError::Failed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::ops::AccessError;
    ///
    /// let err = AccessError::failed("shop::Order", "total", "price list unavailable");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "accessor `total` of `shop::Order` failed: price list unavailable",
    /// );
    /// ```
    #[inline]
    pub fn failed(
        type_path: &'static str,
        accessor: &'static str,
        reason: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Failed {
            type_path,
            accessor,
            reason: reason.into(),
        }
    }
}
