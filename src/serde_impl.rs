//! Serde conversions for [`UString`].
//!
//! A `UString` serializes as a string and therefore requires strict UTF-8
//! contents; deserialization accepts strings or bytes and truncates to the
//! well-formed prefix like every other constructor.

use core::fmt;

use serde::de::{Error as DeError, Visitor};
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::UString;

impl Serialize for UString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().map_or_else(
            || Err(S::Error::custom("UString contents are not strict UTF-8")),
            |s| serializer.serialize_str(s),
        )
    }
}

struct UStringVisitor;

impl Visitor<'_> for UStringVisitor {
    type Value = UString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or UTF-8 bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Ok(UString::from(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Ok(UString::from_bytes(v))
    }
}

impl<'de> Deserialize<'de> for UString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(UStringVisitor)
    }
}
