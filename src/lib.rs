//! # theme-cycle
//!
//! Cycles a page between the light, dark, and synthwave themes and keeps the
//! choice in `localStorage` across loads.
//!
//! The controller in [`controller`] is host-agnostic: it talks to storage and
//! the document through the traits in [`host`]. Building with the `browser`
//! feature adds the `web-sys` implementations and a wasm start entry that
//! applies the stored theme and wires the `#theme-toggle` button.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod memory;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::{ThemeController, attach_trigger};
pub use error::HostError;
pub use theme::{Icon, ParseThemeError, ThemeName};
