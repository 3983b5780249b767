//! Font Catalogue - an ordered list of font names backing a list view.
//!
//! The centre of the crate is [`FontListModel`](model::FontListModel): it
//! holds the labels in their current order, sorts them by one of several
//! criteria, reverses the row order, and toggles a reversible
//! character-reversal transform on every label.
//!
//! # Example
//!
//! ```
//! use font_catalogue::model::{FontListModel, SortCriterion};
//!
//! let model = FontListModel::new(vec!["Times".into(), "Arial".into(), "A".into()]);
//!
//! model.sort(SortCriterion::Alphanumeric);
//! assert_eq!(model.labels(), vec!["A", "Arial", "Times"]);
//!
//! model.reverse_characters();
//! assert_eq!(model.label_at(1), "lairA");
//! assert_eq!(model.non_reversed_labels(), vec!["A", "Arial", "Times"]);
//! ```

pub use font_catalogue_core::*;

pub mod model;
pub mod prelude;
pub mod settings;
pub mod source;

/// Font database access (enumeration and text measurement).
#[cfg(feature = "font-database")]
pub mod text {
    pub use font_catalogue_text::*;
}
