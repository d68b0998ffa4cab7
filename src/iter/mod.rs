//! Async `for_each`, `map`, `filter_map`, `filter` and `flat_map` over
//! collections.
//!
//! Every operation comes in two scheduling disciplines:
//!
//! - [`SequentialExt`] (`async_*`): elements are processed one at a time, in
//!   order. The operation for the next element only starts once the previous
//!   one has completed.
//! - [`ConcurrentExt`] (`concurrent_*`): an operation is started for every
//!   element up front, and all of them are driven at the same time.
//!
//! Either way, outputs come back in the order of the input. Fallible
//! operations (`try_*`) return the first error they encounter and no output.
//!
//! | Name         | Closure returns    | Output            |
//! | ---          | ---                | ---               |
//! | `for_each`   | `()`               | `()`
//! | `map`        | `B`                | `Vec<B>`
//! | `filter_map` | `Option<B>`        | `Vec<B>`, `None`s dropped
//! | `filter`     | `bool`             | `Vec<T>`, the elements that passed
//! | `flat_map`   | `impl IntoIterator`| `Vec<B>`, flattened
//!
//! # Examples
//!
//! ```
//! use collection_concurrency::prelude::*;
//! use futures_lite::future::block_on;
//!
//! block_on(async {
//!     let lengths = vec!["chashu", "nori"]
//!         .concurrent_map(|name| async move { name.len() })
//!         .await;
//!     assert_eq!(lengths, [6, 4]);
//!
//!     let even = vec![1, 2, 3, 4]
//!         .async_filter(|n| {
//!             let n = *n;
//!             async move { n % 2 == 0 }
//!         })
//!         .await;
//!     assert_eq!(even, [2, 4]);
//! })
//! ```

mod concurrent;
mod sequential;

pub use concurrent::ConcurrentExt;
pub use sequential::SequentialExt;
