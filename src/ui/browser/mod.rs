//! Recipe browser screen state (MVI).

mod intent;
mod reducer;
mod state;

pub use intent::BrowserIntent;
pub use reducer::BrowserReducer;
pub use state::{InputMode, Section, ViewState};
