#![forbid(unsafe_code)]

//! Validation style selection flags.

use std::ops::{BitOr, BitOrAssign};

/// Selects which validation decorations a theme may apply.
///
/// The engine passes [`ALL`](ValidationStyleFlags::ALL) for a validated
/// field and [`NONE`](ValidationStyleFlags::NONE) for a field that has not
/// been validated yet; the latter instructs the theme to clear any prior
/// decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ValidationStyleFlags(pub u8);

impl ValidationStyleFlags {
    /// No decoration; clears prior validation styling.
    pub const NONE: Self = Self(0);
    /// Allow marking a valid value.
    pub const VALID_STYLE: Self = Self(1 << 0);
    /// Allow marking an invalid value.
    pub const INVALID_STYLE: Self = Self(1 << 1);
    /// Allow both decorations.
    pub const ALL: Self = Self(Self::VALID_STYLE.0 | Self::INVALID_STYLE.0);

    /// Check if this flags set contains another flags set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Insert flags into this set.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Remove flags from this set.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Check if the flags set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two flag sets (OR operation).
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for ValidationStyleFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for ValidationStyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}
