//! Domain logic shared across the webforge backend.
//!
//! Pure code only: error taxonomy, shared type aliases, the
//! component-name heuristic with its deterministic template, and the
//! prompt-context assembler. No I/O lives here.

pub mod component;
pub mod context;
pub mod error;
pub mod types;
