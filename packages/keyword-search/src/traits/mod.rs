//! Core trait abstractions for the keyword search library.
//!
//! Applications implement these to plug in where results come from.

pub mod source;
