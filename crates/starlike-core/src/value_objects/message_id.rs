//! Message ID - opaque identifier of a rendered message
//!
//! The backend reports ids as JSON integers while the DOM carries them as
//! `data-*` attribute strings. Both forms collapse to the same canonical
//! string so `5` and `"5"` compare equal.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

/// Opaque, non-empty message identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Parse from a string representation (e.g. a `data-id` attribute)
    ///
    /// Surrounding whitespace is ignored; an empty value is rejected.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidMessageId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the canonical string form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string form
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for MessageId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for MessageId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageId::parse(s)
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for MessageId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct MessageIdVisitor;

        impl Visitor<'_> for MessageIdVisitor {
            type Value = MessageId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-empty string or integer message id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                Ok(MessageId::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<MessageId, E>
            where
                E: de::Error,
            {
                MessageId::parse(value).map_err(|_| de::Error::custom("empty message id"))
            }
        }

        deserializer.deserialize_any(MessageIdVisitor)
    }
}
