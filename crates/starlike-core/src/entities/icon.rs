//! Icon state - the two faces of a like star

/// Visual state of a like icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    /// Outline star
    Unliked,
    /// Filled star
    Liked,
}

impl IconState {
    /// State implied by membership in the user's likes
    #[inline]
    pub const fn from_membership(liked: bool) -> Self {
        if liked {
            Self::Liked
        } else {
            Self::Unliked
        }
    }

    /// The state a click moves to
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Liked => Self::Unliked,
            Self::Unliked => Self::Liked,
        }
    }

    #[inline]
    pub const fn is_liked(self) -> bool {
        matches!(self, Self::Liked)
    }
}
