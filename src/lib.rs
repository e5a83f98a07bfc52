//! Recipe catalog browser.
//!
//! The [`view`] module is the core: a pure derivation from catalog and
//! view state to an ordered display list. [`ui`] presents it in the
//! terminal and [`storage`] persists favorites.

pub mod args;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod storage;
pub mod ui;
pub mod view;
