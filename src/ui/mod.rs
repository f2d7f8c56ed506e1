//! Interactive terminal UI for the city guide.
//!
//! The [`builder`] module exposes the public-facing [`GuideUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, input
//! handling, and the widgets, themes, and static copy behind each tab.

mod actions;
mod builder;
pub mod components;
pub mod config;
pub mod content;
pub mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::GuideUi;
pub use config::{PaneUiConfig, Tab, UiConfig};
pub use runtime::run;
pub use state::{App, AppOptions, Flow, GuidesFocus};
pub use theme::Theme;
