//! Immutable updates with structural sharing.
//!
//! Every operation here takes its input by shared reference and returns a new
//! value. Only the containers on the path to the change are copied; all other
//! subtrees are reused through `Arc`, so the old and new values share them.
//!
//! ```text
//! before:  {a: {c: 3}, b: [..]}        after:  {a: {c: 42}, b: ─┐}
//!                        └─────────────── shared ───────────────┘
//! ```

mod error;
mod update;
mod value;

pub use error::UpdateError;
pub use update::{append_immutable, replace_at, set_field, set_in, update_nested_field};
pub use value::Value;
