use serde::Deserialize;
use serde::de::Error as DeError;

/// Decimal amount returned by Unisender as either JSON string or JSON number.
///
/// Number tokens are kept verbatim, so `0.50` stays `"0.50"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportAmount(String);

impl TransportAmount {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected amount to be JSON string or number",
            )),
        }
    }
}

/// Numeric id or counter that Unisender sends either as a number or as a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportNumber(u64);

impl TransportNumber {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Int(u64),
            String(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Int(value) => Ok(Self(value)),
            Wire::String(value) => value
                .trim()
                .parse::<u64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected numeric value, got {value:?}"))),
        }
    }
}

/// Boolean that Unisender sends as `true`/`false`, `1`/`0` or `"1"`/`"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportFlag(bool);

impl TransportFlag {
    pub fn value(self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Bool(bool),
            Int(i64),
            String(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Bool(value) => Ok(Self(value)),
            Wire::Int(value) => Ok(Self(value != 0)),
            Wire::String(value) => match value.trim() {
                "1" | "true" => Ok(Self(true)),
                "0" | "false" | "" => Ok(Self(false)),
                other => Err(D::Error::custom(format!("expected flag, got {other:?}"))),
            },
        }
    }
}
