//! UI building blocks shared by the per-tab views.

/// Place category buttons.
pub(crate) mod categories;
/// Detail overlay with image gallery.
pub(crate) mod detail;
/// Guide inquiry form card.
pub(crate) mod form;
/// Home banner.
pub(crate) mod hero;
/// Table rendering with clickable rows.
pub mod tables;
/// Search prompt and tab strip.
pub(crate) mod tabs;

pub(crate) use categories::render_categories;
pub(crate) use detail::render_detail;
pub(crate) use form::{FormContext, render_form};
pub(crate) use hero::render_hero;
pub(crate) use tables::render_table;
pub use tables::{TableSpec, rating_label};
pub(crate) use tabs::{HeaderContext, render_header};
