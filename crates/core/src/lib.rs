//! Domain types, validation and run-result modelling for the prompt profiler.
//!
//! This crate does no I/O so it can be shared by the database layer, the
//! chat client and the HTTP service alike.

pub mod error;
pub mod pagination;
pub mod prompts;
pub mod run;
pub mod types;
pub mod versioning;
