use std::ops::Range;

/// An ordered collection that can hand out slices of its items.
///
/// `fetch` must tolerate ranges reaching past the end of the collection and
/// simply return fewer items. Lazy pagination relies on this to probe for a
/// next page without knowing the total.
pub trait ItemSource {
    type Item;

    /// Return the items in the half-open `range`, in collection order.
    fn fetch(&self, range: Range<usize>) -> Vec<Self::Item>;
}

/// An [`ItemSource`] that also knows its total length.
pub trait CountedSource: ItemSource {
    fn count(&self) -> usize;
}

fn clamp(range: Range<usize>, len: usize) -> Range<usize> {
    let end = range.end.min(len);
    let start = range.start.min(end);
    start..end
}

impl<'a, T> ItemSource for &'a [T] {
    type Item = &'a T;

    fn fetch(&self, range: Range<usize>) -> Vec<&'a T> {
        let items: &'a [T] = *self;
        items[clamp(range, items.len())].iter().collect()
    }
}

impl<T> CountedSource for &[T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<'a, T> ItemSource for &'a Vec<T> {
    type Item = &'a T;

    fn fetch(&self, range: Range<usize>) -> Vec<&'a T> {
        let items: &'a [T] = (*self).as_slice();
        items[clamp(range, items.len())].iter().collect()
    }
}

impl<T> CountedSource for &Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// A range of integers stands in for a collection of that many rows.
impl ItemSource for Range<usize> {
    type Item = usize;

    fn fetch(&self, range: Range<usize>) -> Vec<usize> {
        let window = clamp(range, self.len());
        (self.start + window.start..self.start + window.end).collect()
    }
}

impl CountedSource for Range<usize> {
    fn count(&self) -> usize {
        self.len()
    }
}
