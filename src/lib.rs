//! A singly-linked list with a sentinel head node.
//!
//! Elements are looked up, inserted after and erased by value; the first
//! occurrence from the front always wins.
//!
//! ```
//! use slist::{SList, SListError};
//!
//! let mut list = SList::from([1, 2, 3]);
//! list.push_back(4);
//! list.insert_after(&2, 20)?;
//! list.erase(&3)?;
//! assert_eq!(list.to_string(), "1 2 20 4 ");
//! assert_eq!(list.find(&99)?, None);
//! # Ok::<(), SListError>(())
//! ```
mod cursor;
mod errors;
mod handle;
mod node;
mod s_list;
#[cfg(feature = "serde")]
mod serde_impl;

pub use cursor::{Cursor, CursorMut};
pub use errors::SListError;
pub use handle::Handle;
pub use s_list::{IntoIter, Iter, IterMut, SList};
