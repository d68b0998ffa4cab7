//! Async iteration over collections, either one element at a time or all
//! elements concurrently.
//!
//! Given a collection and an async operation to run for each of its elements
//! (a network fetch, a disk read), this library can apply the operation to
//! every element and wait for all of them, collect the outputs into a new
//! `Vec`, or use them to filter the collection, without giving up the order
//! of the input.
//!
//! # Operations
//!
//! Every operation is available in two disciplines:
//!
//! - [`iter::SequentialExt`]: `async_for_each`, `async_map`,
//!   `async_filter_map`, `async_filter` and `async_flat_map` await each
//!   element's operation before starting the next one.
//! - [`iter::ConcurrentExt`]: `concurrent_for_each`, `concurrent_map`,
//!   `concurrent_filter_map`, `concurrent_filter` and `concurrent_flat_map`
//!   start the operation for every element up front and await all of them at
//!   once.
//!
//! Each has a `try_` counterpart for operations which return `Result`. These
//! stop at the first error and return it in place of any output.
//!
//! The concurrent operations are built on the indexed task group in
//! [`group`], which can also be used directly to await a `Vec` of futures:
//!
//! - [`group::Join`]: Wait for all futures to complete.
//! - [`group::TryJoin`]: Wait for all futures to complete successfully, or abort early on error.
//!
//! # Examples
//!
//! ```rust
//! use collection_concurrency::prelude::*;
//! use futures_lite::future::block_on;
//!
//! block_on(async {
//!     let ids = vec![1, 2, 3];
//!
//!     // Fetch every record at the same time; results follow `ids`.
//!     let records = ids
//!         .iter()
//!         .concurrent_map(|id| async move { format!("record {id}") })
//!         .await;
//!     assert_eq!(records, ["record 1", "record 2", "record 3"]);
//!
//!     // Stop at the first record which fails to load.
//!     let res: Result<Vec<String>, String> = ids
//!         .iter()
//!         .try_async_map(|id| async move {
//!             match id {
//!                 2 => Err(format!("record {id} is missing")),
//!                 id => Ok(format!("record {id}")),
//!             }
//!         })
//!         .await;
//!     assert_eq!(res, Err("record 2 is missing".to_string()));
//! })
//! ```
//!
//! # Runtime
//!
//! No tasks or threads are spawned. The concurrent operations poll all of
//! their futures from within the single future they return, so they work on
//! any executor, and dropping that future cancels every outstanding
//! operation. Without the default `std` feature the library is `no_std` (it
//! still needs `alloc`), and wake-ups re-poll every outstanding future rather
//! than only the ones that were woken.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

extern crate alloc;

mod utils;

/// The collection concurrency prelude.
pub mod prelude {
    pub use super::group::Join as _;
    pub use super::group::TryJoin as _;
    pub use super::iter::ConcurrentExt as _;
    pub use super::iter::SequentialExt as _;
}

pub mod group;
pub mod iter;

/// Helper functions and types for contiguous growable array type with heap-allocated contents,
/// written `Vec<T>`.
pub mod vec {
    pub use crate::group::join::Join;
    pub use crate::group::try_join::TryJoin;
}
