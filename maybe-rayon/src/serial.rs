use core::iter::{IntoIterator, Iterator};
use core::marker::Send;

pub trait IntoParallelIterator {
    type Iter: Iterator<Item = Self::Item>;
    type Item: Send;

    fn into_par_iter(self) -> Self::Iter;
}

impl<T: IntoIterator> IntoParallelIterator for T
where
    T::Item: Send,
{
    type Iter = T::IntoIter;
    type Item = T::Item;

    fn into_par_iter(self) -> Self::Iter {
        self.into_iter()
    }
}

/// The serial fallback always runs on the calling thread.
pub const fn current_num_threads() -> usize {
    1
}
