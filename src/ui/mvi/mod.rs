//! Model-View-Intent (MVI) primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Store::dispatch ──→ Reducer ──→ State ──→ View
//!    ↑                                                  │
//!    └──────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot, replaced wholesale on every transition
//! - **Intent**: user action or system event
//! - **Reducer**: pure function `(State, Intent) -> State`
//! - **Store**: the single owner of a state value; every mutation goes
//!   through it

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
