//! Simulation domain models.
//!
//! Input processes, the per-run working table, and the records a run
//! produces.
//!
//! # Lifecycle
//!
//! | Type | Owner | Lifetime |
//! |------|-------|----------|
//! | `Process` | Caller | Outlives every run |
//! | `ProcessTable` / `SimProcess` | One run | Created and dropped inside the run |
//! | `ProcessRecord` / `Timeline` | Caller | Returned by the run |

mod process;
mod table;
mod timeline;

pub use process::{processes_from_pairs, Process};
pub use table::{ProcessRecord, ProcessTable, SimProcess};
pub use timeline::{Slice, Timeline};
