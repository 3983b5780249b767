//! Roles and values exchanged between the font list and its views.
//!
//! A view asks for one piece of a row at a time, naming the piece with an
//! [`ItemRole`]. The answer comes back as [`ItemData`].

/// The piece of a row a view is asking for.
///
/// Numeric values follow the usual item-model numbering so roles can cross
/// toolkit boundaries as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRole {
    /// Label text as shown, with character reversal applied.
    Display,
    /// Text an inline editor starts from. Same as `Display`.
    Edit,
    /// Hover text: the label without character reversal.
    ToolTip,
    /// Name of the font to render the row in: the label without character
    /// reversal.
    Font,
    /// Text read by screen readers. Same as `Display`.
    AccessibleText,
    /// Application roles. `User(0)` is the row's insertion sequence number.
    User(u32),
}

impl ItemRole {
    /// Offset of `User(0)` in the numeric encoding.
    pub const USER_BASE: u32 = 256;

    /// Returns `true` for `ItemRole::User`.
    #[inline]
    pub fn is_user_role(&self) -> bool {
        matches!(self, ItemRole::User(_))
    }

    /// Returns the numeric encoding of this role.
    ///
    /// User roles too large to encode saturate at `u32::MAX`.
    pub fn value(&self) -> u32 {
        match self {
            ItemRole::Display => 0,
            ItemRole::Edit => 2,
            ItemRole::ToolTip => 3,
            ItemRole::Font => 6,
            ItemRole::AccessibleText => 12,
            ItemRole::User(n) => Self::USER_BASE.saturating_add(*n),
        }
    }

    /// Decodes a numeric role, or `None` if the number is not a known role.
    pub fn from_value(value: u32) -> Option<Self> {
        Some(match value {
            0 => ItemRole::Display,
            2 => ItemRole::Edit,
            3 => ItemRole::ToolTip,
            6 => ItemRole::Font,
            12 => ItemRole::AccessibleText,
            n if n >= Self::USER_BASE => ItemRole::User(n - Self::USER_BASE),
            _ => return None,
        })
    }
}

/// A value returned for one role of one row.
///
/// ```
/// use font_catalogue::model::ItemData;
///
/// let data = ItemData::from("Gill Sans");
/// assert_eq!(data.as_string(), Some("Gill Sans"));
/// assert!(ItemData::default().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemData {
    /// The row or role has no value.
    #[default]
    None,
    /// Label text.
    String(String),
    /// An integer such as a sequence number.
    Int(i64),
}

impl ItemData {
    /// Returns `true` for `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, ItemData::None)
    }

    /// Returns `true` unless this is `ItemData::None`.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Borrows the text, if this is text.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Takes the text, if this is text.
    pub fn into_string(self) -> Option<String> {
        match self {
            ItemData::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            ItemData::Int(n) => Some(n),
            _ => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(s: String) -> Self {
        ItemData::String(s)
    }
}

impl From<&str> for ItemData {
    fn from(s: &str) -> Self {
        ItemData::String(s.to_owned())
    }
}

impl From<i64> for ItemData {
    fn from(n: i64) -> Self {
        ItemData::Int(n)
    }
}

// Sequence numbers never get near i64::MAX in practice; saturate rather
// than wrap if they do.
impl From<u64> for ItemData {
    fn from(n: u64) -> Self {
        ItemData::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<Option<String>> for ItemData {
    fn from(opt: Option<String>) -> Self {
        opt.map_or(ItemData::None, ItemData::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_encoding() {
        for role in [
            ItemRole::Display,
            ItemRole::Edit,
            ItemRole::ToolTip,
            ItemRole::Font,
            ItemRole::AccessibleText,
            ItemRole::User(0),
            ItemRole::User(9),
        ] {
            assert_eq!(ItemRole::from_value(role.value()), Some(role));
        }
        assert_eq!(ItemRole::User(1).value(), 257);
        assert_eq!(ItemRole::from_value(11), None);
        assert_eq!(ItemRole::User(u32::MAX).value(), u32::MAX);
        assert_eq!(ItemRole::User(u32::MAX - 256).value(), u32::MAX);
        assert!(ItemRole::User(3).is_user_role());
        assert!(!ItemRole::Font.is_user_role());
    }

    #[test]
    fn test_text_data() {
        let data = ItemData::from("Optima");
        assert_eq!(data.as_string(), Some("Optima"));
        assert_eq!(data.as_int(), None);
        assert_eq!(data.into_string(), Some("Optima".to_string()));
        assert!(ItemData::from(None::<String>).is_none());
    }

    #[test]
    fn test_sequence_number_data() {
        assert_eq!(ItemData::from(7u64).as_int(), Some(7));
        assert_eq!(ItemData::from(u64::MAX).as_int(), Some(i64::MAX));
        assert!(ItemData::from(7u64).is_some());
    }
}
