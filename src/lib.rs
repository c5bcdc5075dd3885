//! Tansu: a small desktop file manager.
//!
//! [`io`] is the filesystem facade (list, search, delete, rename, copy, move),
//! [`state::NavigationState`] tracks the directory on display, and
//! [`app::Tansu`] turns UI events into facade calls.

pub mod action;
pub mod app;
pub mod config;
pub mod entry;
pub mod error;
pub mod io;
pub mod logging;
pub mod state;
pub mod style;

mod input;
mod view;

pub use error::FsError;
