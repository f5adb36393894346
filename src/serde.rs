//! Serde hooks for [`SensitiveValue`].
//!
//! The generic serialization mechanism is intercepted here so that field
//! reflection never reaches the raw content: `Serialize` consults the
//! `allow_serialization` flag and fails with a serde error when the flag
//! denies it, mirroring the strict-deny textual-cast policy.

use crate::error::SensitiveValueError;
use crate::value::SensitiveValue;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const STRUCT_NAME: &str = "SensitiveValue";
const FIELDS: &[&str] = &["content", "allow_inline_access", "allow_serialization"];

impl Serialize for SensitiveValue {
    /// Persists all three fields when serialization is allowed; otherwise the
    /// serializer observes nothing and receives an error.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.allows_serialization() {
            return Err(serde::ser::Error::custom(
                SensitiveValueError::SerializationDenied,
            ));
        }
        let mut state = serializer.serialize_struct(STRUCT_NAME, FIELDS.len())?;
        state.serialize_field("content", self.content())?;
        state.serialize_field("allow_inline_access", &self.allows_inline_access())?;
        state.serialize_field("allow_serialization", &self.allows_serialization())?;
        state.end()
    }
}

struct SensitiveValueVisitor;

impl<'de> Visitor<'de> for SensitiveValueVisitor {
    type Value = SensitiveValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a SensitiveValue struct with content and access flags")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut content: Option<Vec<u8>> = None;
        let mut allow_inline_access: Option<bool> = None;
        let mut allow_serialization: Option<bool> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "content" => {
                    if content.is_some() {
                        return Err(de::Error::duplicate_field("content"));
                    }
                    content = Some(map.next_value()?);
                }
                "allow_inline_access" => {
                    if allow_inline_access.is_some() {
                        return Err(de::Error::duplicate_field("allow_inline_access"));
                    }
                    allow_inline_access = Some(map.next_value()?);
                }
                "allow_serialization" => {
                    if allow_serialization.is_some() {
                        return Err(de::Error::duplicate_field("allow_serialization"));
                    }
                    allow_serialization = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }

        let mut content = content.ok_or_else(|| de::Error::missing_field("content"))?;
        let allow_inline_access =
            allow_inline_access.ok_or_else(|| de::Error::missing_field("allow_inline_access"))?;
        let allow_serialization =
            allow_serialization.ok_or_else(|| de::Error::missing_field("allow_serialization"))?;

        // Reconstruct through the primary constructor so the defensive-copy
        // invariant holds, then wipe the intermediate buffer.
        let value = SensitiveValue::new(&content, allow_inline_access, allow_serialization);
        zeroize::Zeroize::zeroize(&mut content);
        Ok(value)
    }
}

impl<'de> Deserialize<'de> for SensitiveValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct(STRUCT_NAME, FIELDS, SensitiveValueVisitor)
    }
}
