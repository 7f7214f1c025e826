//! UserLikes - the server-reported set of messages the current user liked

use std::collections::HashSet;

use crate::value_objects::MessageId;

/// Unordered set of liked message ids
///
/// Fetched fresh for every click; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserLikes {
    ids: HashSet<MessageId>,
}

impl UserLikes {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the user likes the given message
    #[inline]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct liked messages
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Record a liked message, returning `false` if it was already present
    pub fn insert(&mut self, id: MessageId) -> bool {
        self.ids.insert(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageId> {
        self.ids.iter()
    }
}

impl FromIterator<MessageId> for UserLikes {
    fn from_iter<I: IntoIterator<Item = MessageId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<MessageId> for UserLikes {
    fn extend<I: IntoIterator<Item = MessageId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
