//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under stable `blockfall::{core,types}` paths so
//! hosts, integration tests and benches depend on one package.

pub use blockfall_core as core;
pub use blockfall_types as types;
