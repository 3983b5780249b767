//! Model/View types for Font Catalogue.
//!
//! This module separates the font list's data from how a view displays it.
//! Views address rows with a [`ModelIndex`], ask for data by [`ItemRole`],
//! and listen to [`ModelSignals`] to stay in sync.
//!
//! # Core Types
//!
//! - `ModelIndex`: Identifies an item's position in a model
//! - `ItemRole`: Specifies what type of data to access
//! - `ItemData`: Type-erased container for item data
//! - `ItemModel`: The trait that models implement
//! - `ModelSignals`: Signals for change notifications
//!
//! # Model Implementations
//!
//! - `FontListModel`: The ordered font name list with sorting and reversal
//!
//! # Example
//!
//! ```
//! use font_catalogue::model::{FontListModel, ItemModel, ItemRole};
//!
//! let model = FontListModel::new(vec!["Futura".into(), "Didot".into()]);
//!
//! model.signals().layout_changed.connect(|_| {
//!     println!("rows were reordered");
//! });
//!
//! let first = model.index(0, 0);
//! assert_eq!(model.display_text(&first).as_deref(), Some("Futura"));
//! ```

mod font_list;
mod index;
mod role;
mod sort;
mod traits;

pub use font_list::FontListModel;
pub use index::ModelIndex;
pub use role::{ItemData, ItemRole};
pub use sort::{DisplayMetric, ParseSortCriterionError, SortCriterion};
pub use traits::{ItemFlags, ItemModel, ModelSignals};
