//! # ekman
//!
//! Opinionated, automatic colormap selection for labeled scientific dataset
//! variables.
//!
//! Given a variable's name and metadata attributes, ekman classifies it into
//! a semantic category (temperature, salinity, velocity, ...) and selects a
//! matching pair of color palettes: a sequential ramp for magnitudes and a
//! diverging ramp for signed anomalies. Plotting itself happens elsewhere;
//! an adapter implementing the [`Canvas`] trait receives the selected pair.
//!
//! ## Key Features
//!
//! - **Ordered pattern classification**: first matching pattern wins; names
//!   are matched case-insensitively, attribute values verbatim
//! - **Total palette lookup**: unknown and unmatched categories fall back to
//!   sensible defaults (viridis / balance), never an error
//! - **Scoped overrides**: temporarily replace patterns or palettes for the
//!   duration of a scope, with guaranteed entry-by-entry restoration
//! - **Ocean-science palettes**: a cmocean-inspired collection built on
//!   `colorgrad` gradients
//!
//! ## Architecture
//!
//! - **Classification**: ordered regex table mapping names/attributes to
//!   category tags
//! - **Registry**: the pattern table plus sequential/diverging palette
//!   tables, process-wide by default or explicitly owned
//! - **Dispatch**: thin accessors wrapping plotting calls with the selected
//!   palette pair

pub mod classify;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod options;
pub mod palettes;
pub mod plot;
pub mod registry;

pub use classify::Category;
pub use dataset::{AttributeValue, DataArray, Dataset};
pub use error::{EkmanError, Result};
pub use logging::init_tracing;
pub use options::{Overrides, OptionsGuard};
pub use palettes::Palette;
pub use plot::{
    Canvas, Cmo, DatasetCmo, PalettePair, PlotArgs, PlotData, PlotKind, PlotRequest,
};
pub use registry::Registry;
