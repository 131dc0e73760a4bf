use std::ops::{BitOr, BitOrAssign};

use super::split::end_border;

/// Which sides of the header row carry a border.
///
/// Computed once per block from the header line and shared by detection and
/// folding of that block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    left: bool,
    right: bool,
}

impl BorderStyle {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };

    /// Reads the border style of a (space-trimmed) header line.
    ///
    /// LEFT when the header starts with `|`; RIGHT when it ends with an
    /// unescaped `|`, `|+` or `:`, the continuation markers counting as a
    /// right border.
    pub fn of_header(header: &str) -> Self {
        let mut border = Self::NONE;
        if header.starts_with('|') {
            border |= Self::LEFT;
        }
        if end_border(header).is_some() {
            border |= Self::RIGHT;
        }
        border
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// True if every side set in `other` is also set in `self`.
    pub fn contains(self, other: Self) -> bool {
        (self | other) == self
    }
}

impl BitOr for BorderStyle {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            left: self.left || rhs.left,
            right: self.right || rhs.right,
        }
    }
}

impl BitOrAssign for BorderStyle {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
