//! A styled single-line input for a design canvas.
//!
//! [`components::Input`] renders a text or password field with configurable
//! borders, radii and colors, an optional icon with a click action, and a
//! password visibility toggle. Wrap inputs in a [`components::StyleHost`] so
//! inputs sharing an instance id share one stylesheet.

pub mod components;
pub mod config;
pub mod field;
pub mod slot;
pub mod style;
