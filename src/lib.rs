//! Bookshelf Application Library
//!
//! Wires the book-inventory modules onto the bookshelf kernel, store,
//! and HTTP crates.

pub mod modules;
