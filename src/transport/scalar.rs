use serde::Deserialize;
use serde::de::Error as DeError;

/// Reach field that is documented as a string but may arrive as a bare number:
/// `balance`, `DlrCode`, `To` and the send result `id`.
///
/// Numbers keep their JSON token as written, so a balance of `10.00` reads back as `"10.00"`
/// and a DLR code of `000` is not collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportScalar(String);

impl TransportScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportScalar {
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
                "expected field to be JSON string or number",
            )),
        }
    }
}
