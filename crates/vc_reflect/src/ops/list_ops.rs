use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// An ordered sequence of reflected values.
///
/// Elements are visited in index order. An element may itself be
/// [`Null`](crate::ops::ReflectRef::Null), e.g. the `None`s of a
/// `Vec<Option<T>>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::Reflect;
///
/// let values = vec![1_u8, 2, 3];
/// let list = values.reflect_ref().as_list().unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1).unwrap().downcast_ref::<u8>(), Some(&2));
///
/// let sum: u8 = list.iter().filter_map(|v| v.downcast_ref::<u8>()).sum();
/// assert_eq!(sum, 6);
/// ```
pub trait List: Reflect {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the elements in index order.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the elements of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListItemIter<'a> {
    /// Creates an iterator positioned at the first element.
    #[inline]
    pub fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
