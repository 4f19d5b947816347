//! A singly-linked list, written as an exercise in following links and moving ownership down a
//! chain of boxed nodes.
//!
//! # Purpose
//! This crate is a learning project with no expectation of being used in production. The list
//! exists to demonstrate the pointer-following mechanics of a linked structure: appending by
//! walking to the tail, inserting and removing by relinking the node before a position, and
//! releasing the whole chain when the list goes away.
//!
//! # Method
//! Every node exclusively owns its successor and the list exclusively owns the head, so the chain
//! is expressed with nothing but [`Box`] and [`Option`]. There is no unsafe code. Walks that need to
//! relink a node hold a mutable borrow of the *link* (the `Option<Box<Node>>` slot) rather than of
//! the node, which lets insertion and removal at any position share a single traversal routine.
//!
//! # Error Handling
//! Operations that can't be satisfied report it rather than faulting. Lookups return [`Option`],
//! while removal returns a [`Result`] with a strongly typed error, using enums for static dispatch
//! with structs (often ZSTs) that implement [`Error`](std::error::Error). A small number of
//! convenience methods panic instead, mirroring [`Index`](std::ops::Index), and each of them has a
//! `try_` counterpart.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![forbid(unsafe_code)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
