//! The font list model.
//!
//! `FontListModel` holds an ordered list of font names for a list view. Sort
//! and reverse operations reorder the rows in place, so row indices always
//! address the order the view shows. Character reversal rewrites every
//! label's text and can be switched back off to restore the original text.

use std::sync::Arc;

use font_catalogue_core::Result;
use font_catalogue_core::logging::{span_names, targets};
use parking_lot::RwLock;
use unicode_segmentation::UnicodeSegmentation;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};
use super::sort::{DisplayMetric, SortCriterion, is_sorted_by, sort_records};
use super::traits::{ItemFlags, ItemModel, ModelSignals};
use crate::settings::CatalogueSettings;
use crate::source::LabelSource;

/// One row of the list.
///
/// `text` is what the view shows. `original` holds the text from before
/// character reversal was switched on; while reversal is off it equals
/// `text`. `seq` is assigned on insertion and never changes, so sorting by it
/// restores insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LabelRecord {
    pub(crate) text: String,
    pub(crate) original: String,
    pub(crate) seq: u64,
}

impl LabelRecord {
    pub(crate) fn new(text: String, seq: u64) -> Self {
        Self {
            original: text.clone(),
            text,
            seq,
        }
    }
}

#[derive(Debug, Default)]
struct ListState {
    records: Vec<LabelRecord>,
    sort_criterion: SortCriterion,
    order_reversed: bool,
    characters_reversed: bool,
    // Rows run against the last sort (or insertion order).
    rows_reversed: bool,
    // The last sort compared character-reversed text.
    sorted_reversed_text: bool,
    next_seq: u64,
}

impl ListState {
    fn with_labels(labels: Vec<String>) -> Self {
        let records: Vec<LabelRecord> = labels
            .into_iter()
            .enumerate()
            .map(|(seq, text)| LabelRecord::new(text, seq as u64))
            .collect();
        Self {
            next_seq: records.len() as u64,
            records,
            ..Default::default()
        }
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn set_characters_reversed(&mut self, reversed: bool) {
        if reversed == self.characters_reversed {
            return;
        }
        if reversed {
            for record in &mut self.records {
                record.original = record.text.clone();
                record.text = reverse_text(&record.original);
            }
        } else {
            for record in &mut self.records {
                record.text = record.original.clone();
            }
        }
        self.characters_reversed = reversed;
    }
}

/// Reverses `text` by grapheme cluster, keeping combining marks on their base.
fn reverse_text(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

/// An ordered list of font names with sorting and reversal.
///
/// The model is created by whoever owns the view (usually wrapped in an
/// `Arc`) and passed to the parts of the UI that need it. It is `Send + Sync`,
/// but each call is independent: sequences of calls are not atomic.
///
/// # Panics
///
/// Index-based methods panic when given an index outside the list, like
/// slice indexing does. Views that may hold stale indices should go through
/// [`ItemModel::data`], which returns `ItemData::None` instead.
///
/// # Example
///
/// ```
/// use font_catalogue::model::{FontListModel, SortCriterion};
///
/// let model = FontListModel::new(vec!["Arial".into(), "A".into(), "Times".into()]);
///
/// model.sort(SortCriterion::CharacterCount);
/// assert_eq!(model.labels(), vec!["A", "Arial", "Times"]);
///
/// model.reverse_order();
/// assert_eq!(model.labels(), vec!["Times", "Arial", "A"]);
///
/// model.sort(SortCriterion::None);
/// assert_eq!(model.labels(), vec!["Arial", "A", "Times"]);
/// ```
pub struct FontListModel {
    state: RwLock<ListState>,
    metric: RwLock<Option<Arc<dyn DisplayMetric>>>,
    signals: ModelSignals,
}

impl FontListModel {
    /// Creates a model holding `labels` in the given (insertion) order.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            state: RwLock::new(ListState::with_labels(labels)),
            metric: RwLock::new(None),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a model with the labels supplied by `source`.
    pub fn from_source(source: &dyn LabelSource) -> Result<Self> {
        let labels = source.labels()?;
        tracing::debug!(
            target: targets::MODEL,
            count = labels.len(),
            "loaded labels from source"
        );
        Ok(Self::new(labels))
    }

    /// Sets the metric used by [`SortCriterion::DisplaySize`].
    pub fn with_display_metric(self, metric: impl DisplayMetric + 'static) -> Self {
        *self.metric.write() = Some(Arc::new(metric));
        self
    }

    /// Replaces (or with `None`, removes) the display size metric.
    pub fn set_display_metric(&self, metric: Option<Arc<dyn DisplayMetric>>) {
        *self.metric.write() = metric;
    }

    /// Returns `true` if a display size metric is installed.
    pub fn has_display_metric(&self) -> bool {
        self.metric.read().is_some()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the number of labels in the model.
    pub fn count(&self) -> usize {
        self.state.read().records.len()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// Returns the label shown at `index`, with character reversal applied.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    pub fn label_at(&self, index: usize) -> String {
        let state = self.state.read();
        let count = state.records.len();
        match state.records.get(index) {
            Some(record) => record.text.clone(),
            None => panic!("label index {index} out of range for list of {count} labels"),
        }
    }

    /// Returns all labels as shown, in the current order.
    pub fn labels(&self) -> Vec<String> {
        self.state
            .read()
            .records
            .iter()
            .map(|r| r.text.clone())
            .collect()
    }

    /// Returns the labels without character reversal, in the current order.
    ///
    /// While characters are not reversed this is the same as
    /// [`labels`](Self::labels). Labels inserted while reversal was on
    /// appear exactly as they were inserted.
    pub fn non_reversed_labels(&self) -> Vec<String> {
        self.state
            .read()
            .records
            .iter()
            .map(|r| r.original.clone())
            .collect()
    }

    /// Returns the criterion of the most recent sort.
    pub fn sort_criterion(&self) -> SortCriterion {
        self.state.read().sort_criterion
    }

    /// Returns the state of the order-reversal toggle.
    pub fn is_order_reversed(&self) -> bool {
        self.state.read().order_reversed
    }

    /// Returns `true` while character reversal is on.
    pub fn is_characters_reversed(&self) -> bool {
        self.state.read().characters_reversed
    }

    /// Returns `true` if the rows are in ascending order for `criterion`.
    pub fn is_sorted(&self, criterion: SortCriterion) -> bool {
        let metric = self.metric.read().clone();
        is_sorted_by(&self.state.read().records, criterion, metric.as_deref())
    }

    // -------------------------------------------------------------------------
    // Row mutation
    // -------------------------------------------------------------------------

    /// Removes the label at `index` and returns its shown text.
    ///
    /// Later rows shift up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    pub fn remove_at(&self, index: usize) -> String {
        let count = self.count();
        assert!(
            index < count,
            "removal index {index} out of range for list of {count} labels"
        );

        let removed = self.signals.emit_rows_removed(index, index, || {
            self.state.write().records.remove(index)
        });
        tracing::debug!(
            target: targets::MODEL,
            index,
            count = count - 1,
            label = %removed.text,
            "removed label"
        );
        removed.text
    }

    /// Inserts `text` so that it ends up at `index`.
    ///
    /// The text is stored as given for both the shown and the non-reversed
    /// label, even while character reversal is on: inserted labels are not
    /// reversed, and switching reversal off leaves them unchanged.
    ///
    /// The new label sorts after every existing label under
    /// [`SortCriterion::None`].
    ///
    /// # Panics
    ///
    /// Panics if `index > count()`.
    pub fn insert(&self, text: impl Into<String>, index: usize) {
        let text = text.into();
        let count = self.count();
        assert!(
            index <= count,
            "insertion index {index} out of range for list of {count} labels"
        );

        tracing::debug!(
            target: targets::MODEL,
            index,
            count = count + 1,
            label = %text,
            "inserting label"
        );
        self.signals.emit_rows_inserted(index, index, || {
            let mut state = self.state.write();
            let seq = state.take_seq();
            state.records.insert(index, LabelRecord::new(text, seq));
        });
    }

    /// Appends `text` at the end of the list.
    pub fn push(&self, text: impl Into<String>) {
        let index = self.count();
        self.insert(text, index);
    }

    /// Moves the label at `from` so that it ends up at `to`.
    ///
    /// This is what a drag-to-reorder gesture does. Unlike removing and
    /// re-inserting the text, the label keeps its non-reversed text and its
    /// place in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` is not less than `count()`.
    pub fn move_row(&self, from: usize, to: usize) {
        let count = self.count();
        assert!(
            from < count && to < count,
            "move from {from} to {to} out of range for list of {count} labels"
        );
        if from == to {
            return;
        }

        self.signals.emit_rows_moved(from, to, || {
            let mut state = self.state.write();
            let record = state.records.remove(from);
            state.records.insert(to, record);
        });
        tracing::debug!(target: targets::MODEL, from, to, "moved label");
    }

    /// Replaces all labels, clearing sort and reversal state.
    pub fn set_labels(&self, labels: Vec<String>) {
        let count = labels.len();
        self.signals.emit_reset(|| {
            *self.state.write() = ListState::with_labels(labels);
        });
        tracing::debug!(target: targets::MODEL, count, "reset labels");
    }

    /// Removes all labels, clearing sort and reversal state.
    pub fn clear(&self) {
        self.set_labels(Vec::new());
    }

    // -------------------------------------------------------------------------
    // Ordering and transformation
    // -------------------------------------------------------------------------

    /// Toggles character reversal.
    ///
    /// Switching it on remembers every label's current text and replaces it
    /// with the reversed text. Switching it off restores the remembered text;
    /// it never reverses a second time.
    pub fn reverse_characters(&self) {
        let (reversed, count) = {
            let mut state = self.state.write();
            let reversed = !state.characters_reversed;
            state.set_characters_reversed(reversed);
            (reversed, state.records.len())
        };

        tracing::debug!(
            target: targets::MODEL,
            reversed,
            count,
            "toggled character reversal"
        );
        if count > 0 {
            self.signals
                .emit_data_changed_range(0, count - 1, vec![ItemRole::Display]);
        }
    }

    /// Sorts the labels by `criterion`, using the installed display metric
    /// for [`SortCriterion::DisplaySize`].
    ///
    /// The rows end up in ascending order even if the order was reversed
    /// before; the order-reversal toggle itself is left as it is.
    pub fn sort(&self, criterion: SortCriterion) {
        let metric = self.metric.read().clone();
        self.sort_impl(criterion, metric.as_deref());
    }

    /// Sorts the labels by `criterion`, measuring display sizes with `metric`.
    pub fn sort_with_metric(&self, criterion: SortCriterion, metric: &dyn DisplayMetric) {
        self.sort_impl(criterion, Some(metric));
    }

    fn sort_impl(&self, criterion: SortCriterion, metric: Option<&dyn DisplayMetric>) {
        let _span = tracing::debug_span!(target: targets::MODEL, span_names::SORT, %criterion).entered();

        let applied = self.signals.emit_layout_changed(|| {
            let mut state = self.state.write();
            let applied = sort_records(&mut state.records, criterion, metric);
            state.sort_criterion = criterion;
            state.rows_reversed = false;
            state.sorted_reversed_text = state.characters_reversed;
            applied
        });
        tracing::debug!(
            target: targets::MODEL,
            requested = %criterion,
            %applied,
            "sorted labels"
        );
    }

    /// Toggles the order-reversal flag and reverses the rows.
    ///
    /// Applying it twice restores the previous order.
    pub fn reverse_order(&self) {
        let reversed = self.signals.emit_layout_changed(|| {
            let mut state = self.state.write();
            state.records.reverse();
            state.order_reversed = !state.order_reversed;
            state.rows_reversed = !state.rows_reversed;
            state.order_reversed
        });
        tracing::debug!(target: targets::MODEL, reversed, "toggled order reversal");
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Applies stored presentation state.
    ///
    /// The labels are sorted by the stored criterion, comparing
    /// character-reversed text if the stored sort did. The rows are then
    /// reversed if they ran against that sort, and finally character reversal
    /// and the order-reversal toggle are set to their stored values.
    pub fn apply_settings(&self, settings: &CatalogueSettings) {
        let metric = self.metric.read().clone();
        self.signals.emit_layout_changed(|| {
            let mut state = self.state.write();
            state.set_characters_reversed(settings.sorted_reversed_text);
            sort_records(&mut state.records, settings.sort_criterion, metric.as_deref());
            state.sort_criterion = settings.sort_criterion;
            state.sorted_reversed_text = settings.sorted_reversed_text;

            let rows_reversed = settings.rows_reversed();
            if rows_reversed {
                state.records.reverse();
            }
            state.rows_reversed = rows_reversed;
            state.order_reversed = settings.order_reversed;
            state.set_characters_reversed(settings.characters_reversed);
        });
        tracing::debug!(
            target: targets::SETTINGS,
            criterion = %settings.sort_criterion,
            order_reversed = settings.order_reversed,
            characters_reversed = settings.characters_reversed,
            "applied settings"
        );
    }

    /// Captures the current presentation state into `settings`, leaving the
    /// font database options untouched.
    pub fn store_settings(&self, settings: &mut CatalogueSettings) {
        let state = self.state.read();
        settings.sort_criterion = state.sort_criterion;
        settings.order_reversed = state.order_reversed;
        settings.characters_reversed = state.characters_reversed;
        settings.rows_reversed = Some(state.rows_reversed);
        settings.sorted_reversed_text = state.sorted_reversed_text;
    }

    /// Returns default settings carrying the current presentation state.
    pub fn settings_snapshot(&self) -> CatalogueSettings {
        let mut settings = CatalogueSettings::default();
        self.store_settings(&mut settings);
        settings
    }

    fn with_record<R>(&self, index: &ModelIndex, f: impl FnOnce(&LabelRecord) -> R) -> Option<R> {
        if !index.is_valid() || index.column() != 0 {
            return None;
        }
        self.state.read().records.get(index.row()).map(f)
    }
}

impl Default for FontListModel {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for FontListModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("FontListModel")
            .field("count", &state.records.len())
            .field("sort_criterion", &state.sort_criterion)
            .field("order_reversed", &state.order_reversed)
            .field("characters_reversed", &state.characters_reversed)
            .field("has_display_metric", &self.metric.read().is_some())
            .finish()
    }
}

impl ItemModel for FontListModel {
    fn row_count(&self) -> usize {
        self.count()
    }

    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData {
        self.with_record(index, |record| match role {
            ItemRole::Display | ItemRole::Edit | ItemRole::AccessibleText => {
                ItemData::from(record.text.as_str())
            }
            ItemRole::ToolTip | ItemRole::Font => ItemData::from(record.original.as_str()),
            ItemRole::User(0) => ItemData::from(record.seq),
            _ => ItemData::None,
        })
        .unwrap_or_default()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn flags(&self, index: &ModelIndex) -> ItemFlags {
        self.with_record(index, |_| ItemFlags::new().with_drag(true).with_drop(true))
            .unwrap_or_else(ItemFlags::disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn model(labels: &[&str]) -> FontListModel {
        FontListModel::new(labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_new_model() {
        let model = model(&["Arial", "Times"]);
        assert_eq!(model.count(), 2);
        assert!(!model.is_empty());
        assert_eq!(model.label_at(1), "Times");
        assert_eq!(model.sort_criterion(), SortCriterion::None);
        assert!(!model.is_order_reversed());
        assert!(!model.is_characters_reversed());
        assert!(FontListModel::empty().is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_label_at_out_of_range() {
        model(&["Arial"]).label_at(1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_out_of_range() {
        model(&[]).remove_at(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range() {
        model(&["Arial"]).insert("Times", 2);
    }

    #[test]
    fn test_reverse_characters_round_trip() {
        let model = model(&["Arial", "Times"]);
        model.reverse_characters();
        assert_eq!(model.labels(), vec!["lairA", "semiT"]);
        assert_eq!(model.non_reversed_labels(), vec!["Arial", "Times"]);
        assert!(model.is_characters_reversed());

        model.reverse_characters();
        assert_eq!(model.labels(), vec!["Arial", "Times"]);
        assert!(!model.is_characters_reversed());
    }

    #[test]
    fn test_reverse_characters_keeps_combining_marks() {
        let model = model(&["Cafe\u{301} Sans"]);
        model.reverse_characters();
        assert_eq!(model.label_at(0), "snaS e\u{301}faC");
    }

    #[test]
    fn test_non_reversed_labels_without_reversal() {
        let model = model(&["Arial", "Times"]);
        assert_eq!(model.non_reversed_labels(), model.labels());
    }

    #[test]
    fn test_insert_while_reversed_is_not_reversed() {
        let model = model(&["Arial"]);
        model.reverse_characters();
        model.insert("Didot", 0);

        assert_eq!(model.labels(), vec!["Didot", "lairA"]);
        assert_eq!(model.non_reversed_labels(), vec!["Didot", "Arial"]);

        model.reverse_characters();
        assert_eq!(model.labels(), vec!["Didot", "Arial"]);
    }

    #[test]
    fn test_remove_keeps_views_aligned() {
        let model = model(&["Arial", "Times", "Didot"]);
        model.reverse_characters();
        assert_eq!(model.remove_at(1), "semiT");
        assert_eq!(model.labels(), vec!["lairA", "todiD"]);
        assert_eq!(model.non_reversed_labels(), vec!["Arial", "Didot"]);
    }

    #[test]
    fn test_sort_keeps_views_aligned() {
        let model = model(&["Times", "Arial"]);
        model.reverse_characters();
        model.sort(SortCriterion::Alphanumeric);
        // "lairA" < "semiT"
        assert_eq!(model.labels(), vec!["lairA", "semiT"]);
        assert_eq!(model.non_reversed_labels(), vec!["Arial", "Times"]);
    }

    #[test]
    fn test_sort_does_not_reset_order_flag() {
        let model = model(&["b", "a", "c"]);
        model.reverse_order();
        model.sort(SortCriterion::Alphanumeric);

        assert_eq!(model.labels(), vec!["a", "b", "c"]);
        assert!(model.is_order_reversed());
        assert_eq!(model.sort_criterion(), SortCriterion::Alphanumeric);

        model.reverse_order();
        assert_eq!(model.labels(), vec!["c", "b", "a"]);
        assert!(!model.is_order_reversed());
    }

    #[test]
    fn test_move_row_keeps_identity() {
        let model = model(&["Arial", "Times", "Didot"]);
        model.reverse_characters();
        model.move_row(0, 2);
        assert_eq!(model.labels(), vec!["semiT", "todiD", "lairA"]);
        assert_eq!(model.non_reversed_labels(), vec!["Times", "Didot", "Arial"]);

        model.sort(SortCriterion::None);
        assert_eq!(model.labels(), vec!["lairA", "semiT", "todiD"]);
    }

    #[test]
    fn test_inserted_label_sorts_last_in_insertion_order() {
        let model = model(&["Arial", "Times"]);
        model.insert("Didot", 0);
        model.sort(SortCriterion::Alphanumeric);
        model.sort(SortCriterion::None);
        assert_eq!(model.labels(), vec!["Arial", "Times", "Didot"]);
    }

    #[test]
    fn test_display_metric_is_used() {
        let model = model(&["Wide", "Narrow"]).with_display_metric(|label: &str| {
            Some(if label == "Wide" { 20.0 } else { 5.0 })
        });
        assert!(model.has_display_metric());
        model.sort(SortCriterion::DisplaySize);
        assert_eq!(model.labels(), vec!["Narrow", "Wide"]);
        assert!(model.is_sorted(SortCriterion::DisplaySize));

        model.set_display_metric(None);
        assert!(!model.has_display_metric());
    }

    #[test]
    fn test_display_metric_measures_original_text() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recv = seen.clone();
        let model = model(&["Arial"]).with_display_metric(move |label: &str| {
            recv.lock().push(label.to_string());
            Some(1.0)
        });
        model.reverse_characters();
        model.sort(SortCriterion::DisplaySize);
        assert_eq!(*seen.lock(), vec!["Arial".to_string()]);
    }

    #[test]
    fn test_item_model_data() {
        let model = model(&["Arial", "Times"]);
        model.reverse_characters();

        let index = model.index(0, 0);
        assert!(index.is_valid());
        assert_eq!(model.row_count(), 2);
        assert_eq!(model.column_count(), 1);
        assert_eq!(model.display_text(&index).as_deref(), Some("lairA"));
        assert_eq!(
            model.data(&index, ItemRole::Font).as_string(),
            Some("Arial")
        );
        assert_eq!(model.data(&index, ItemRole::User(0)).as_int(), Some(0));
        assert!(model.data(&index, ItemRole::User(1)).is_none());

        assert!(!model.index(2, 0).is_valid());
        assert!(!model.index(0, 1).is_valid());
        assert!(model.data(&ModelIndex::new(5, 0), ItemRole::Display).is_none());
        assert!(model.flags(&index).drag_enabled);
        assert!(!model.flags(&ModelIndex::new(5, 0)).enabled);
    }

    #[test]
    fn test_remove_signals() {
        let model = model(&["A", "B", "C"]);
        let removed = Arc::new(Mutex::new(Vec::new()));

        let recv = removed.clone();
        model.signals().rows_removed.connect(move |(first, last)| {
            recv.lock().push((*first, *last));
        });

        assert_eq!(model.remove_at(1), "B");
        assert_eq!(*removed.lock(), vec![(1, 1)]);
    }

    #[test]
    fn test_layout_signals_on_sort_and_reverse() {
        let model = model(&["C", "A", "B"]);
        let changes = Arc::new(Mutex::new(0));

        let recv = changes.clone();
        model
            .signals()
            .layout_changed
            .connect(move |_| *recv.lock() += 1);

        model.sort(SortCriterion::Alphanumeric);
        model.reverse_order();
        assert_eq!(*changes.lock(), 2);
    }

    #[test]
    fn test_data_changed_on_reverse_characters() {
        let model = model(&["Arial", "Times", "Didot"]);
        let ranges = Arc::new(Mutex::new(Vec::new()));

        let recv = ranges.clone();
        model
            .signals()
            .data_changed
            .connect(move |(top, bottom, _)| recv.lock().push((top.row(), bottom.row())));

        model.reverse_characters();
        assert_eq!(*ranges.lock(), vec![(0, 2)]);
    }

    #[test]
    fn test_slots_can_read_the_model() {
        let model = Arc::new(model(&["Arial"]));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let weak = Arc::downgrade(&model);
        let recv = seen.clone();
        model.signals().rows_inserted.connect(move |(first, _)| {
            if let Some(model) = weak.upgrade() {
                recv.lock().push(model.label_at(*first));
            }
        });

        model.push("Times");
        assert_eq!(*seen.lock(), vec!["Times".to_string()]);
    }

    #[test]
    fn test_settings_round_trip() {
        let source = model(&["Times", "Arial", "Didot"]);
        source.sort(SortCriterion::Alphanumeric);
        source.reverse_order();
        source.reverse_characters();
        let settings = source.settings_snapshot();

        let target = model(&["Times", "Arial", "Didot"]);
        target.apply_settings(&settings);
        assert_eq!(target.labels(), source.labels());
        assert_eq!(target.sort_criterion(), SortCriterion::Alphanumeric);
        assert!(target.is_order_reversed());
        assert!(target.is_characters_reversed());
    }

    #[test]
    fn test_set_labels_resets_state() {
        let model = model(&["Arial"]);
        model.reverse_characters();
        model.sort(SortCriterion::CharacterCount);
        model.set_labels(vec!["Didot".into(), "Futura".into()]);

        assert_eq!(model.labels(), vec!["Didot", "Futura"]);
        assert!(!model.is_characters_reversed());
        assert_eq!(model.sort_criterion(), SortCriterion::None);

        model.clear();
        assert!(model.is_empty());
    }
}
