//! tui-pairlock (workspace facade crate).
//!
//! This package keeps a single `tui_pairlock::{core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pairlock_core as core;
pub use tui_pairlock_input as input;
pub use tui_pairlock_term as term;
pub use tui_pairlock_types as types;
