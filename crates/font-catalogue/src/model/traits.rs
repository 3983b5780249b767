//! The interface between list models and the views that show them.

use font_catalogue_core::Signal;

use super::index::ModelIndex;
use super::role::{ItemData, ItemRole};

/// What a view may do with a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemFlags {
    /// The row can be selected.
    pub selectable: bool,
    /// The row accepts inline editing.
    pub editable: bool,
    /// The row can be picked up for drag-to-reorder.
    pub drag_enabled: bool,
    /// Dragged rows can be dropped onto this row.
    pub drop_enabled: bool,
    /// The row reacts to input at all.
    pub enabled: bool,
}

impl ItemFlags {
    /// Selectable and enabled, nothing else.
    pub fn new() -> Self {
        Self {
            selectable: true,
            enabled: true,
            ..Default::default()
        }
    }

    /// No interaction at all. Returned for rows that do not exist.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Sets `drag_enabled`.
    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    /// Sets `drop_enabled`.
    pub fn with_drop(mut self, enabled: bool) -> Self {
        self.drop_enabled = enabled;
        self
    }
}

/// Read access a list view needs from a model.
///
/// Implementors supply [`row_count`](ItemModel::row_count),
/// [`data`](ItemModel::data) and [`signals`](ItemModel::signals); the rest
/// has defaults.
pub trait ItemModel: Send + Sync {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns. Lists have one.
    fn column_count(&self) -> usize {
        1
    }

    /// Value of `role` for the row at `index`.
    ///
    /// Invalid or out-of-range indices and unsupported roles yield
    /// `ItemData::None`; this never panics.
    fn data(&self, index: &ModelIndex, role: ItemRole) -> ItemData;

    /// Change notifications for this model.
    fn signals(&self) -> &ModelSignals;

    /// Index of the cell at `row`, `column`, or an invalid index if there is
    /// no such cell.
    fn index(&self, row: usize, column: usize) -> ModelIndex {
        if row < self.row_count() && column < self.column_count() {
            ModelIndex::new(row, column)
        } else {
            ModelIndex::invalid()
        }
    }

    /// Interaction flags for the row at `index`.
    fn flags(&self, _index: &ModelIndex) -> ItemFlags {
        ItemFlags::new()
    }

    /// Shorthand for the `Display` role as a string.
    fn display_text(&self, index: &ModelIndex) -> Option<String> {
        self.data(index, ItemRole::Display).into_string()
    }
}

/// Signals a model emits around every change.
///
/// Structural changes come in pairs: the `*_about_to_*` signal fires while
/// the old state is still readable, the other one once the new state is in
/// place. Slots run after the model has released its internal lock and may
/// call back into the model.
///
/// | change | signals |
/// |---|---|
/// | insert | `rows_about_to_be_inserted`, `rows_inserted` |
/// | remove | `rows_about_to_be_removed`, `rows_removed` |
/// | drag-to-reorder | `rows_about_to_be_moved`, `rows_moved` |
/// | sort, order reversal | `layout_about_to_change`, `layout_changed` |
/// | character reversal | `data_changed` |
/// | replace all labels | `model_about_to_reset`, `model_reset` |
pub struct ModelSignals {
    /// `(first, last)` rows, before insertion.
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,
    /// `(first, last)` rows, after insertion.
    pub rows_inserted: Signal<(usize, usize)>,
    /// `(first, last)` rows, before removal.
    pub rows_about_to_be_removed: Signal<(usize, usize)>,
    /// `(first, last)` rows, after removal.
    pub rows_removed: Signal<(usize, usize)>,
    /// `(from, to)` rows, before a move.
    pub rows_about_to_be_moved: Signal<(usize, usize)>,
    /// `(from, to)` rows, after a move.
    pub rows_moved: Signal<(usize, usize)>,
    /// `(top, bottom, roles)` for rows whose values changed in place.
    pub data_changed: Signal<(ModelIndex, ModelIndex, Vec<ItemRole>)>,
    /// Rows are about to be reordered.
    pub layout_about_to_change: Signal<()>,
    /// Rows were reordered.
    pub layout_changed: Signal<()>,
    /// All rows are about to be replaced.
    pub model_about_to_reset: Signal<()>,
    /// All rows were replaced.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates signals with nothing connected.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            rows_about_to_be_moved: Signal::new(),
            rows_moved: Signal::new(),
            data_changed: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    // Each helper below runs `change` between a pair of signals and hands
    // back its result. `change` must drop any model lock before returning.

    /// Wraps an insertion of rows `first..=last`.
    pub fn emit_rows_inserted<R>(&self, first: usize, last: usize, change: impl FnOnce() -> R) -> R {
        self.rows_about_to_be_inserted.emit((first, last));
        let result = change();
        self.rows_inserted.emit((first, last));
        result
    }

    /// Wraps a removal of rows `first..=last`.
    pub fn emit_rows_removed<R>(&self, first: usize, last: usize, change: impl FnOnce() -> R) -> R {
        self.rows_about_to_be_removed.emit((first, last));
        let result = change();
        self.rows_removed.emit((first, last));
        result
    }

    /// Wraps moving the row at `from` to `to`.
    pub fn emit_rows_moved<R>(&self, from: usize, to: usize, change: impl FnOnce() -> R) -> R {
        self.rows_about_to_be_moved.emit((from, to));
        let result = change();
        self.rows_moved.emit((from, to));
        result
    }

    /// Wraps a reordering of rows.
    pub fn emit_layout_changed<R>(&self, change: impl FnOnce() -> R) -> R {
        self.layout_about_to_change.emit(());
        let result = change();
        self.layout_changed.emit(());
        result
    }

    /// Wraps a replacement of every row.
    pub fn emit_reset<R>(&self, change: impl FnOnce() -> R) -> R {
        self.model_about_to_reset.emit(());
        let result = change();
        self.model_reset.emit(());
        result
    }

    /// Announces that `roles` changed for rows `first..=last`.
    pub fn emit_data_changed_range(&self, first: usize, last: usize, roles: Vec<ItemRole>) {
        self.data_changed
            .emit((ModelIndex::new(first, 0), ModelIndex::new(last, 0), roles));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_item_flags() {
        let plain = ItemFlags::new();
        assert!(plain.selectable && plain.enabled);
        assert!(!plain.editable && !plain.drag_enabled && !plain.drop_enabled);

        let reorderable = ItemFlags::new().with_drag(true).with_drop(true);
        assert!(reorderable.drag_enabled && reorderable.drop_enabled);

        assert_eq!(ItemFlags::disabled(), ItemFlags::default());
    }

    #[test]
    fn test_change_runs_between_signals() {
        let signals = ModelSignals::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let log = events.clone();
        signals
            .rows_about_to_be_removed
            .connect(move |&(first, last)| log.lock().push(format!("before {first}..={last}")));
        let log = events.clone();
        signals
            .rows_removed
            .connect(move |&(first, last)| log.lock().push(format!("after {first}..={last}")));

        let log = events.clone();
        let removed = signals.emit_rows_removed(1, 1, || {
            log.lock().push("remove".to_string());
            "Didot"
        });

        assert_eq!(removed, "Didot");
        assert_eq!(*events.lock(), vec!["before 1..=1", "remove", "after 1..=1"]);
    }

    #[test]
    fn test_layout_and_reset_pairs() {
        let signals = ModelSignals::new();
        let count = Arc::new(Mutex::new(0));

        for signal in [
            &signals.layout_about_to_change,
            &signals.layout_changed,
            &signals.model_about_to_reset,
            &signals.model_reset,
        ] {
            let count = count.clone();
            signal.connect(move |_| *count.lock() += 1);
        }

        signals.emit_layout_changed(|| ());
        assert_eq!(*count.lock(), 2);
        signals.emit_reset(|| ());
        assert_eq!(*count.lock(), 4);
    }

    #[test]
    fn test_data_changed_range() {
        let signals = ModelSignals::new();
        let seen = Arc::new(Mutex::new(None));

        let recv = seen.clone();
        signals.data_changed.connect(move |(top, bottom, roles)| {
            *recv.lock() = Some((top.row(), bottom.row(), roles.clone()));
        });

        signals.emit_data_changed_range(0, 4, vec![ItemRole::Display]);
        assert_eq!(*seen.lock(), Some((0, 4, vec![ItemRole::Display])));
    }
}
