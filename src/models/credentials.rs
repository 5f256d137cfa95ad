use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Database credential bundle, as stored in Secrets Manager for an RDS instance.
///
/// Extra keys written by RDS (`engine`, `dbInstanceIdentifier`, ...) are ignored.
/// `port` and `dbname` may be absent, in which case the driver defaults apply.
///
/// `host`, `username` and `password` are required. Inside a Lambda sandbox the
/// driver defaults for them (`localhost`, `PGUSER`, `PGPASSWORD`) never point at
/// the target instance, so a bundle missing one fails here with the field named
/// (``missing field `host` ``) instead of as an opaque connection error later.
#[derive(Debug, Deserialize)]
pub struct DbCredentials {
    pub host: String,
    pub username: String,
    pub password: SecretString,
    #[serde(default, deserialize_with = "deserialize_port")]
    pub port: Option<u16>,
    #[serde(default)]
    pub dbname: Option<String>,
}

impl DbCredentials {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

// Hand-edited secrets sometimes store the port as a string.
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    let port = match &value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    port.map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid port: {value}")))
}
