use alloc::vec::Vec;
use core::future::Future;

/// Record where a sequential iteration stopped and hand the error back.
fn stopped_at<E>(index: usize, err: E) -> E {
    tracing::trace!(index, "element operation failed, stopping iteration");
    err
}

/// Process the elements of a collection one at a time.
///
/// Each operation is awaited before the closure is called for the next
/// element, just like a `for` loop with an `.await` in its body. Fallible
/// variants stop at the first `Err`: the closure is never called for any of
/// the elements after it.
///
/// This trait is implemented for every [`IntoIterator`].
///
/// # Examples
///
/// ```
/// use collection_concurrency::prelude::*;
/// use futures_lite::future::block_on;
///
/// block_on(async {
///     let mut seen = vec![];
///     vec![1, 2, 3]
///         .async_for_each(|n| {
///             seen.push(n);
///             async {}
///         })
///         .await;
///     assert_eq!(seen, [1, 2, 3]);
/// })
/// ```
#[allow(async_fn_in_trait)]
pub trait SequentialExt: IntoIterator + Sized {
    /// Run an async operation on each element, one after the other.
    async fn async_for_each<F, Fut>(self, mut f: F)
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = ()>,
    {
        for item in self {
            f(item).await;
        }
    }

    /// Run a fallible async operation on each element, one after the other,
    /// stopping at the first error.
    async fn try_async_for_each<F, Fut, E>(self, mut f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        for (index, item) in self.into_iter().enumerate() {
            f(item).await.map_err(|err| stopped_at(index, err))?;
        }
        Ok(())
    }

    /// Transform each element with an async operation, one after the other.
    async fn async_map<F, Fut, B>(self, mut f: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = B>,
    {
        let iter = self.into_iter();
        let mut output = Vec::with_capacity(iter.size_hint().0);
        for item in iter {
            output.push(f(item).await);
        }
        output
    }

    /// Transform each element with a fallible async operation, one after the
    /// other, stopping at the first error.
    ///
    /// # Examples
    ///
    /// ```
    /// use collection_concurrency::prelude::*;
    /// use futures_lite::future::block_on;
    ///
    /// block_on(async {
    ///     let res = vec![1, 2, 3]
    ///         .try_async_map(|n| async move {
    ///             if n == 2 {
    ///                 Err(format!("cannot map {n}"))
    ///             } else {
    ///                 Ok(n * 10)
    ///             }
    ///         })
    ///         .await;
    ///     assert_eq!(res, Err("cannot map 2".to_string()));
    /// })
    /// ```
    async fn try_async_map<F, Fut, B, E>(self, mut f: F) -> Result<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<B, E>>,
    {
        let iter = self.into_iter();
        let mut output = Vec::with_capacity(iter.size_hint().0);
        for (index, item) in iter.enumerate() {
            output.push(f(item).await.map_err(|err| stopped_at(index, err))?);
        }
        Ok(output)
    }

    /// Transform each element with an async operation, one after the other,
    /// keeping only the `Some` outputs.
    async fn async_filter_map<F, Fut, B>(self, mut f: F) -> Vec<B>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Option<B>>,
    {
        let mut output = Vec::new();
        for item in self {
            if let Some(value) = f(item).await {
                output.push(value);
            }
        }
        output
    }

    /// Fallible version of [`async_filter_map`][SequentialExt::async_filter_map].
    async fn try_async_filter_map<F, Fut, B, E>(self, mut f: F) -> Result<Vec<B>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<Option<B>, E>>,
    {
        let mut output = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            if let Some(value) = f(item).await.map_err(|err| stopped_at(index, err))? {
                output.push(value);
            }
        }
        Ok(output)
    }

    /// Keep the elements for which an async predicate returns `true`,
    /// evaluating the predicate one element at a time.
    ///
    /// The predicate receives a reference to the element; the future it
    /// returns cannot borrow from it.
    async fn async_filter<F, Fut>(self, mut f: F) -> Vec<Self::Item>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut output = Vec::new();
        for item in self {
            if f(&item).await {
                output.push(item);
            }
        }
        output
    }

    /// Fallible version of [`async_filter`][SequentialExt::async_filter].
    async fn try_async_filter<F, Fut, E>(self, mut f: F) -> Result<Vec<Self::Item>, E>
    where
        F: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        let mut output = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            if f(&item).await.map_err(|err| stopped_at(index, err))? {
                output.push(item);
            }
        }
        Ok(output)
    }

    /// Transform each element into a sequence with an async operation, one
    /// after the other, and concatenate the sequences.
    async fn async_flat_map<F, Fut, U>(self, mut f: F) -> Vec<U::Item>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = U>,
        U: IntoIterator,
    {
        let mut output = Vec::new();
        for item in self {
            output.extend(f(item).await);
        }
        output
    }

    /// Fallible version of [`async_flat_map`][SequentialExt::async_flat_map].
    async fn try_async_flat_map<F, Fut, U, E>(self, mut f: F) -> Result<Vec<U::Item>, E>
    where
        F: FnMut(Self::Item) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        U: IntoIterator,
    {
        let mut output = Vec::new();
        for (index, item) in self.into_iter().enumerate() {
            output.extend(f(item).await.map_err(|err| stopped_at(index, err))?);
        }
        Ok(output)
    }
}

impl<I: IntoIterator> SequentialExt for I {}
