//! Command implementation for the CLI.
//!
//! The full implementation lives here and is invoked by the thin
//! `billsplit` binary wrapper.

pub mod split;
