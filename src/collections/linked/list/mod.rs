//! A module containing [`LinkedList`] and associated types.
//!
//! Besides the list itself, this includes [`Node`], which is handed out by the node-returning
//! lookups, and the iterator types for owned and borrowed iteration.
//!
//! [`LinkedList`] is also re-exported under the parent module.

mod iter;
mod linked_list;
mod node;

pub use iter::*;
pub use linked_list::*;
pub use node::*;
