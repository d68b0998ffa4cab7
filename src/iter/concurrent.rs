use crate::group::{Join, TryJoin};

use alloc::vec::Vec;
use core::future::Future;

/// Process the elements of a collection concurrently.
///
/// The closure is called once for every element, in input order, before any
/// of the returned futures is awaited. All futures are then driven together
/// inside the returned future, without a limit on how many are in flight.
/// They are first polled in input order; after that they are polled
/// whenever they are woken, and may complete in any order. Outputs are
/// still reported in input order.
///
/// Fallible variants return as soon as any element fails, dropping the
/// futures that have not completed yet. If several elements fail, which of
/// their errors is returned depends on the order in which they complete.
///
/// No tasks are spawned: the concurrency is confined to the future returned
/// by each method, which runs on whatever executor awaits it. Dropping that
/// future cancels every outstanding operation.
///
/// This trait is implemented for every [`IntoIterator`].
///
/// # Examples
///
/// ```
/// use collection_concurrency::prelude::*;
/// use futures_lite::future::{block_on, yield_now};
///
/// block_on(async {
///     let out = vec![3, 2, 1]
///         .concurrent_map(|n| async move {
///             // Larger numbers take longer to finish...
///             for _ in 0..n {
///                 yield_now().await;
///             }
///             n * 2
///         })
///         .await;
///     // ...but the outputs follow the input.
///     assert_eq!(out, [6, 4, 2]);
/// })
/// ```
#[allow(async_fn_in_trait)]
pub trait ConcurrentExt: IntoIterator + Sized {
    /// Run an async operation on each element concurrently, waiting until
    /// all of them have completed.
    async fn concurrent_for_each<F, Fut>(self, f: F)
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.into_iter().map(f).collect::<Vec<_>>().join().await;
    }

    /// Run a fallible async operation on each element concurrently, returning
    /// early on the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection_concurrency::prelude::*;
    /// use futures_lite::future::block_on;
    /// use std::io;
    ///
    /// block_on(async {
    ///     let res = vec!["a.txt", "", "c.txt"]
    ///         .try_concurrent_for_each(|path| async move {
    ///             if path.is_empty() {
    ///                 return Err(io::Error::new(io::ErrorKind::NotFound, "empty path"));
    ///             }
    ///             Ok(())
    ///         })
    ///         .await;
    ///     assert_eq!(res.unwrap_err().kind(), io::ErrorKind::NotFound);
    /// })
    /// ```
    async fn try_concurrent_for_each<F, Fut, E>(self, f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        self.into_iter()
            .map(f)
            .collect::<Vec<_>>()
            .try_join()
            .await
            .map(|_| ())
    }

    /// Transform each element with an async operation, running all of them
    /// concurrently.
    async fn concurrent_map<F, Fut, B>(self, f: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = B>,
    {
        self.into_iter().map(f).collect::<Vec<_>>().join().await
    }

    /// Transform each element with a fallible async operation, running all
    /// of them concurrently and returning early on the first error.
    async fn try_concurrent_map<F, Fut, B, E>(self, f: F) -> Result<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<B, E>>,
    {
        self.into_iter().map(f).collect::<Vec<_>>().try_join().await
    }

    /// Transform each element with an async operation, running all of them
    /// concurrently, and keep only the `Some` outputs.
    async fn concurrent_filter_map<F, Fut, B>(self, f: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<B>>,
    {
        let outputs = self.into_iter().map(f).collect::<Vec<_>>().join().await;
        outputs.into_iter().flatten().collect()
    }

    /// Fallible version of [`concurrent_filter_map`][ConcurrentExt::concurrent_filter_map].
    async fn try_concurrent_filter_map<F, Fut, B, E>(self, f: F) -> Result<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<Option<B>, E>>,
    {
        let outputs = self.into_iter().map(f).collect::<Vec<_>>().try_join().await?;
        Ok(outputs.into_iter().flatten().collect())
    }

    /// Keep the elements for which an async predicate returns `true`,
    /// evaluating the predicate for all elements concurrently.
    ///
    /// The predicate receives a reference to the element; the future it
    /// returns cannot borrow from it.
    async fn concurrent_filter<F, Fut>(self, f: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let items: Vec<_> = self.into_iter().collect();
        let keep = items.iter().map(f).collect::<Vec<_>>().join().await;
        retain(items, keep)
    }

    /// Fallible version of [`concurrent_filter`][ConcurrentExt::concurrent_filter].
    async fn try_concurrent_filter<F, Fut, E>(self, f: F) -> Result<Vec<Self::Item>, E>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        let items: Vec<_> = self.into_iter().collect();
        let keep = items.iter().map(f).collect::<Vec<_>>().try_join().await?;
        Ok(retain(items, keep))
    }

    /// Transform each element into a sequence with an async operation,
    /// running all of them concurrently, and concatenate the sequences in
    /// input order.
    async fn concurrent_flat_map<F, Fut, U>(self, f: F) -> Vec<U::Item>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = U>,
        U: IntoIterator,
    {
        let outputs = self.into_iter().map(f).collect::<Vec<_>>().join().await;
        outputs.into_iter().flatten().collect()
    }

    /// Fallible version of [`concurrent_flat_map`][ConcurrentExt::concurrent_flat_map].
    async fn try_concurrent_flat_map<F, Fut, U, E>(self, f: F) -> Result<Vec<U::Item>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        U: IntoIterator,
    {
        let outputs = self.into_iter().map(f).collect::<Vec<_>>().try_join().await?;
        Ok(outputs.into_iter().flatten().collect())
    }
}

impl<I: IntoIterator> ConcurrentExt for I {}

/// Keep `items[i]` wherever `keep[i]` is `true`.
fn retain<T>(items: Vec<T>, keep: Vec<bool>) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, keep)| keep.then_some(item))
        .collect()
}
