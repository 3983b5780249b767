//! Sort criteria for the font list.
//!
//! Every criterion sorts ascending and stably: labels with equal keys keep
//! their relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use font_catalogue_core::logging::targets;
use unicode_segmentation::UnicodeSegmentation;

use super::font_list::LabelRecord;

/// How the font list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortCriterion {
    /// Insertion order.
    #[default]
    None,
    /// Case-insensitive lexicographic order of the label text.
    Alphanumeric,
    /// Number of characters in the label text.
    CharacterCount,
    /// Rendered size of the label, as reported by a [`DisplayMetric`].
    DisplaySize,
}

impl SortCriterion {
    /// All criteria, in menu order.
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::None,
        SortCriterion::Alphanumeric,
        SortCriterion::CharacterCount,
        SortCriterion::DisplaySize,
    ];

    /// The name used in settings files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::None => "none",
            SortCriterion::Alphanumeric => "alphanumeric",
            SortCriterion::CharacterCount => "character-count",
            SortCriterion::DisplaySize => "display-size",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort criterion name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion: {0}")]
pub struct ParseSortCriterionError(String);

impl FromStr for SortCriterion {
    type Err = ParseSortCriterionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSortCriterionError(s.to_string()))
    }
}

/// Supplies the display size of a label for [`SortCriterion::DisplaySize`].
///
/// The metric receives the label's untransformed text (the font name) and
/// returns a size, typically the rendered width, or `None` if it cannot
/// measure that label.
///
/// Any `Fn(&str) -> Option<f64>` closure is a metric:
///
/// ```
/// use font_catalogue::model::{DisplayMetric, FontListModel, SortCriterion};
///
/// let width = |label: &str| Some(label.len() as f64 * 0.5);
/// assert_eq!(width.measure("Didot"), Some(2.5));
///
/// let model = FontListModel::new(vec!["Optima".into(), "Didot".into()]);
/// model.sort_with_metric(SortCriterion::DisplaySize, &width);
/// assert_eq!(model.labels(), vec!["Didot", "Optima"]);
/// ```
pub trait DisplayMetric: Send + Sync {
    /// Returns the display size of `label`.
    fn measure(&self, label: &str) -> Option<f64>;
}

impl<F> DisplayMetric for F
where
    F: Fn(&str) -> Option<f64> + Send + Sync,
{
    fn measure(&self, label: &str) -> Option<f64> {
        self(label)
    }
}

/// Number of user-perceived characters in `text`.
pub(crate) fn character_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Sorts `records` in place by `criterion`.
///
/// Returns the criterion that was actually applied, which differs from the
/// requested one only when `DisplaySize` falls back to `CharacterCount`.
pub(crate) fn sort_records(
    records: &mut [LabelRecord],
    criterion: SortCriterion,
    metric: Option<&dyn DisplayMetric>,
) -> SortCriterion {
    match criterion {
        SortCriterion::None => {
            records.sort_by_key(|r| r.seq);
            criterion
        }
        SortCriterion::Alphanumeric => {
            records.sort_by_cached_key(|r| r.text.to_lowercase());
            criterion
        }
        SortCriterion::CharacterCount => {
            records.sort_by_cached_key(|r| character_count(&r.text));
            criterion
        }
        SortCriterion::DisplaySize => {
            let Some(sizes) = metric.and_then(|m| measure_all(records, m)) else {
                tracing::warn!(
                    target: targets::MODEL,
                    "display size unavailable, sorting by character count"
                );
                return sort_records(records, SortCriterion::CharacterCount, None);
            };
            let mut keyed: Vec<(f64, LabelRecord)> =
                sizes.into_iter().zip(records.iter().cloned()).collect();
            keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
            for (slot, (_, record)) in records.iter_mut().zip(keyed) {
                *slot = record;
            }
            criterion
        }
    }
}

/// Measures every record, or returns `None` if any label cannot be measured.
fn measure_all(records: &[LabelRecord], metric: &dyn DisplayMetric) -> Option<Vec<f64>> {
    records.iter().map(|r| metric.measure(&r.original)).collect()
}

/// Returns true if `records` are in ascending order for `criterion`.
///
/// `DisplaySize` is checked with the same fallback rule as sorting.
pub(crate) fn is_sorted_by(
    records: &[LabelRecord],
    criterion: SortCriterion,
    metric: Option<&dyn DisplayMetric>,
) -> bool {
    match criterion {
        SortCriterion::None => ascending(records, |a, b| a.seq.cmp(&b.seq)),
        SortCriterion::Alphanumeric => ascending(records, |a, b| {
            a.text.to_lowercase().cmp(&b.text.to_lowercase())
        }),
        SortCriterion::CharacterCount => ascending(records, |a, b| {
            character_count(&a.text).cmp(&character_count(&b.text))
        }),
        SortCriterion::DisplaySize => match metric.and_then(|m| measure_all(records, m)) {
            Some(sizes) => sizes
                .windows(2)
                .all(|w| w[0].total_cmp(&w[1]) != Ordering::Greater),
            None => is_sorted_by(records, SortCriterion::CharacterCount, None),
        },
    }
}

fn ascending<F>(records: &[LabelRecord], cmp: F) -> bool
where
    F: Fn(&LabelRecord, &LabelRecord) -> Ordering,
{
    records
        .windows(2)
        .all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}
