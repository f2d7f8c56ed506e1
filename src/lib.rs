//! Core crate exports for browsing the Varanasi travel guide in a terminal.
//!
//! The catalogue, filtering, gallery, modal, and inquiry controllers are plain
//! state machines with no terminal dependency; [`ui`] composes them into the
//! interactive application. The root re-exports the types embedders need so
//! they can configure and run the guide without digging through modules.

pub mod app_dirs;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod inquiry;
pub mod links;
pub mod logging;
pub mod modal;
pub mod outcome;
pub mod search;
pub mod section;
pub mod timer;
pub mod ui;

pub use catalog::{
	Catalog, CatalogFile, CatalogIndex, CatalogItem, CatalogSet, Food, Guide, Location, Place,
	PlaceCategory, TransportMode,
};
pub use error::{CatalogError, FormError, GalleryError};
pub use filter::{CategoryFilter, FilteredView};
pub use gallery::{Carousel, Gallery};
pub use inquiry::{FormField, Inquiry, InquiryForm, LocalAcknowledgement, SubmissionSink};
pub use links::{Link, LinkKind, LinkLog, LinkSink};
pub use outcome::SessionOutcome;
pub use search::SearchQuery;
pub use section::CatalogSection;
pub use ui::{App, AppOptions, GuideUi, Tab, Theme, UiConfig, run};
