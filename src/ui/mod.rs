//! Terminal presentation of the recipe browser.
//!
//! [`app::App`] owns the [`browser::ViewState`] and feeds key presses to
//! the browser reducer. [`render`] draws whatever the state says.

pub mod app;
pub mod browser;
pub mod card;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod plain;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
