//! Model-View-Intent (MVI) primitives for the browser UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: value describing what the screen shows
//! - **Intent**: key press or timer event, already translated
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Side effects such as persisting favorites happen in the owner of the
//! state after the reducer returns.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
