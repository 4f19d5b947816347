//! Linked collection types. Primarily revolves around [`LinkedList`] and the [`Node`]s it is built
//! from.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Node};
