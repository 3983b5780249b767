//! Prelude module for Font Catalogue.
//!
//! ```ignore
//! use font_catalogue::prelude::*;
//! ```

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};
pub use crate::{CatalogueError, Result};

// ============================================================================
// Model/View
// ============================================================================

pub use crate::model::{
    DisplayMetric, FontListModel, ItemData, ItemFlags, ItemModel, ItemRole, ModelIndex,
    ModelSignals, SortCriterion,
};

// ============================================================================
// Sources and Settings
// ============================================================================

pub use crate::settings::CatalogueSettings;
pub use crate::source::{LabelSource, StaticLabelSource};

#[cfg(feature = "font-database")]
pub use crate::source::DisplaySizeMetric;
#[cfg(feature = "font-database")]
pub use crate::text::{FontDatabase, FontDatabaseConfig};
