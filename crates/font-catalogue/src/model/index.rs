//! Positional addressing of rows.
//!
//! An index names a row in the model's current order, not a particular
//! label. Any insert, removal, sort or reversal can make an index held by a
//! view point at a different label, or past the end of the list.

use std::fmt;

/// A cell position handed out by [`ItemModel::index`](super::ItemModel::index).
///
/// ```
/// use font_catalogue::model::ModelIndex;
///
/// let index = ModelIndex::new(2, 0);
/// assert_eq!(index.sibling(3, 0).row(), 3);
/// assert!(!ModelIndex::invalid().sibling(3, 0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelIndex {
    row: usize,
    column: usize,
    valid: bool,
}

impl ModelIndex {
    /// The index that addresses nothing.
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            row: 0,
            column: 0,
            valid: false,
        }
    }

    /// An index for `row`, `column`. Not checked against any model.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            valid: true,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Row number; 0 for the invalid index.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column number; 0 for the invalid index.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }

    /// Another position in the same model. Invalid stays invalid.
    pub fn sibling(&self, row: usize, column: usize) -> ModelIndex {
        if self.valid {
            ModelIndex::new(row, column)
        } else {
            ModelIndex::invalid()
        }
    }
}

impl Default for ModelIndex {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for ModelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.valid {
            true => write!(f, "({}, {})", self.row, self.column),
            false => f.write_str("(invalid)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index() {
        let index = ModelIndex::default();
        assert_eq!(index, ModelIndex::invalid());
        assert!(!index.is_valid());
        assert_eq!((index.row(), index.column()), (0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ModelIndex::new(4, 0).to_string(), "(4, 0)");
        assert_eq!(ModelIndex::invalid().to_string(), "(invalid)");
    }
}
