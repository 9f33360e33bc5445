use core::fmt;
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::value::RawValue;

const EXPECTING: &str = "a number or a string holding a number";

/// A numeric value kept in its textual form.
///
/// The `CrUX` API reports some values as JSON strings (`"0.10"`) and others as JSON numbers
/// (`2500`). A number is kept as the literal that appeared in the body, so `0.10` stays
/// `0.10` and `1e400` decodes without error. The text is not validated when decoding;
/// [`DecimalString::to_f64`] is the only conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecimalString(String);

impl DecimalString {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the text to a finite floating point number.
    ///
    /// Returns `None` for text that isn't a number and for values outside the range of `f64`.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DecimalString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for DecimalString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();

        match text.as_bytes().first() {
            Some(b'"') => serde_json::from_str::<String>(text).map(Self).map_err(de::Error::custom),
            Some(b'-' | b'0'..=b'9') => Ok(Self(text.to_string())),
            _ => Err(de::Error::invalid_type(Unexpected::Other(text), &EXPECTING)),
        }
    }
}
