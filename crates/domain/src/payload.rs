//! Client payloads — the JSON object carried by create and update requests.
//!
//! A [`Payload`] is consumed field by field: typed fields are taken out with
//! [`Payload::take`], keys a record refuses to accept are dropped with
//! [`Payload::without`], and whatever is left becomes the record's
//! [`Extra`] attributes.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Free-form attributes kept verbatim alongside a record's typed fields.
pub type Extra = Map<String, Value>;

/// Keys no client may set, whatever the record type.
pub const RESERVED_KEYS: &[&str] = &["id", "created_at", "updated_at", "__class__"];

/// A non-empty JSON object submitted by a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse a request body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotJson`] when the bytes are not JSON, are
    /// not an object, or are an empty object.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ValidationError::NotJson)?;
        Self::from_value(value)
    }

    /// Wrap an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotJson`] unless `value` is a non-empty object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) if !map.is_empty() => Ok(Self(map)),
            _ => Err(ValidationError::NotJson),
        }
    }

    /// Check that every key in `keys` is present, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] naming the first absent key.
    pub fn require(&self, keys: &[&'static str]) -> Result<(), ValidationError> {
        match keys.iter().copied().find(|key| !self.0.contains_key(*key)) {
            Some(key) => Err(ValidationError::MissingField(key)),
            None => Ok(()),
        }
    }

    /// Drop [`RESERVED_KEYS`] plus the given keys.
    #[must_use]
    pub fn without(mut self, ignored: &[&str]) -> Self {
        for key in RESERVED_KEYS.iter().chain(ignored) {
            self.0.remove(*key);
        }
        self
    }

    /// Remove `key` and decode it as `T`.
    ///
    /// Returns `Ok(None)` when the key is absent. Use `T = Option<_>` for
    /// fields that may be cleared with `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when the value does not
    /// decode as `T`.
    pub fn take<T: DeserializeOwned>(
        &mut self,
        key: &'static str,
        expected: &'static str,
    ) -> Result<Option<T>, ValidationError> {
        self.0
            .remove(key)
            .map(|value| {
                serde_json::from_value(value).map_err(|_| ValidationError::InvalidField {
                    field: key,
                    expected,
                })
            })
            .transpose()
    }

    /// Like [`take`](Self::take), but the key must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when absent, or
    /// [`ValidationError::InvalidField`] when mistyped.
    pub fn take_required<T: DeserializeOwned>(
        &mut self,
        key: &'static str,
        expected: &'static str,
    ) -> Result<T, ValidationError> {
        self.take(key, expected)?
            .ok_or(ValidationError::MissingField(key))
    }

    /// Remove `key` and decode it as a non-negative whole number.
    ///
    /// Floats with no fractional part, such as `3.0`, are accepted since
    /// JSON does not tell them apart from integers.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] for anything else, including
    /// values that do not fit in a `u32`.
    pub fn take_count(&mut self, key: &'static str) -> Result<Option<u32>, ValidationError> {
        self.0
            .remove(key)
            .map(|value| {
                count_of(&value).ok_or(ValidationError::InvalidField {
                    field: key,
                    expected: "non-negative integer",
                })
            })
            .transpose()
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Look at the raw value of `key` without consuming it.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Consume the payload, returning the remaining keys.
    #[must_use]
    pub fn into_extra(self) -> Extra {
        self.0
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn count_of(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let n = value.as_f64()?;
    if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}
