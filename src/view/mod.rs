//! Pure view derivation over the recipe catalog.
//!
//! ```text
//! catalog ──→ search ──→ filter ──→ sort ──→ DisplayList
//! ```
//!
//! Nothing in this module performs I/O or mutates its inputs.

mod display;
mod favorites;
mod filter;
mod search;
mod sort;
mod steps;

pub use display::{compute_display_list, DisplayList};
pub use favorites::{toggle_favorite, FavoriteSet};
pub use filter::{Filter, QUICK_MAX_MINUTES};
pub use search::SearchQuery;
pub use sort::{compare_titles, SortOrder};
pub use steps::{flatten_steps, render_steps, render_steps_at, RenderedStep, StepLine};
