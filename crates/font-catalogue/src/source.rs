//! Where labels come from, and how their display size is measured.
//!
//! A [`LabelSource`] produces the initial list of font names. With the
//! `font-database` feature, [`FontDatabase`](crate::text::FontDatabase) is a
//! source of the installed font names, and [`DisplaySizeMetric`] measures each
//! name set in its own font.

use font_catalogue_core::Result;

/// Supplies the initial labels for a
/// [`FontListModel`](crate::model::FontListModel).
pub trait LabelSource {
    /// Returns the labels in their insertion order.
    fn labels(&self) -> Result<Vec<String>>;
}

/// A fixed list of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticLabelSource {
    labels: Vec<String>,
}

impl StaticLabelSource {
    /// Creates a source that always returns `labels`.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

impl LabelSource for StaticLabelSource {
    fn labels(&self) -> Result<Vec<String>> {
        Ok(self.labels.clone())
    }
}

#[cfg(feature = "font-database")]
mod font_database {
    use std::sync::Arc;

    use font_catalogue_core::{CatalogueError, Result};
    use font_catalogue_core::logging::{span_names, targets};

    use super::LabelSource;
    use crate::model::DisplayMetric;
    use crate::text::FontDatabase;

    impl LabelSource for FontDatabase {
        fn labels(&self) -> Result<Vec<String>> {
            let _span = tracing::debug_span!(target: targets::SOURCE, span_names::ENUMERATE).entered();
            let names = self.font_names();
            if names.is_empty() && self.face_count() > 0 {
                return Err(CatalogueError::Source(format!(
                    "{} font faces loaded but none has a usable name",
                    self.face_count()
                )));
            }
            tracing::debug!(
                target: targets::SOURCE,
                faces = self.face_count(),
                names = names.len(),
                "enumerated fonts"
            );
            Ok(names)
        }
    }

    /// Measures a label as the width of its text set in the font it names.
    ///
    /// Labels naming a font that is not in the database cannot be measured,
    /// which makes a display size sort fall back to character count.
    #[derive(Debug, Clone)]
    pub struct DisplaySizeMetric {
        db: Arc<FontDatabase>,
    }

    impl DisplaySizeMetric {
        /// Creates a metric backed by `db`.
        pub fn new(db: Arc<FontDatabase>) -> Self {
            Self { db }
        }

        /// Returns the backing database.
        pub fn database(&self) -> &Arc<FontDatabase> {
            &self.db
        }
    }

    impl DisplayMetric for DisplaySizeMetric {
        fn measure(&self, label: &str) -> Option<f64> {
            self.db.measure_text(label, label)
        }
    }
}

#[cfg(feature = "font-database")]
pub use font_database::DisplaySizeMetric;
