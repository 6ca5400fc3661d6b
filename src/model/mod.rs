//! Curriculum tree: cycle -> semester -> UE -> ECUE.
//!
//! Each node owns its children and a `Stats` that is the sum of theirs.
//! Aggregation happens eagerly in the `add_*` methods, which also reject a
//! second child with the same code.

pub mod cycle;
pub mod ecue;
pub mod semester;
pub mod ue;

pub use cycle::{Cycle, Preamble, Syllabus};
pub use ecue::{Activity, Ecue, Evaluation, Reference, ReferenceKind};
pub use semester::Semester;
pub use ue::{short_code, EcueSlot, Ue};
