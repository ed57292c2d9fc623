use std::ops::Add;

/// Running sum of a sequence of increments
/// The i-th element of the output is the sum of `increments[0..=i]`
/// # Example
/// ```
/// use bonjean::prelude::cumulative_sum;
/// assert_eq!(cumulative_sum(&[1., 2., 3., 4., 5.]), vec![1., 3., 6., 10., 15.]);
/// assert_eq!(cumulative_sum(&[0., 0., 0.]), vec![0., 0., 0.]);
/// ```
pub fn cumulative_sum<T: Copy + Add<Output = T>>(increments: &[T]) -> Vec<T> {
    increments.iter().copied().cumulative().collect()
}

/// Iterator adaptor yielding the running sum of the underlying items
pub struct CumulativeIter<I: Iterator> {
    iter: I,
    total: Option<I::Item>,
}

impl<I> Iterator for CumulativeIter<I>
where
    I: Iterator,
    I::Item: Copy + Add<Output = I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let total = match self.total {
            Some(total) => total + next,
            None => next,
        };
        self.total = Some(total);
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I> ExactSizeIterator for CumulativeIter<I>
where
    I: ExactSizeIterator,
    I::Item: Copy + Add<Output = I::Item>,
{
}

/// Extension trait to accumulate any iterator of summable values
pub trait Cumulative: Iterator + Sized {
    fn cumulative(self) -> CumulativeIter<Self> {
        CumulativeIter {
            iter: self,
            total: None,
        }
    }
}

impl<I: Iterator> Cumulative for I {}
