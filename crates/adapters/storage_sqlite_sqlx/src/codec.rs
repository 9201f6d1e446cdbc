//! Column codecs shared by the repositories.

use hbnb_domain::payload::Extra;
use hbnb_domain::time::Timestamp;

use crate::error::StorageError;

pub(crate) fn encode_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339()
}

pub(crate) fn decode_timestamp(raw: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn encode_extra(extra: &Extra) -> Result<String, StorageError> {
    Ok(serde_json::to_string(extra)?)
}

pub(crate) fn decode_extra(raw: &str) -> Result<Extra, sqlx::Error> {
    serde_json::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Counters are stored as `INTEGER` and must fit a `u32`.
pub(crate) fn decode_count(raw: i64) -> Result<u32, sqlx::Error> {
    u32::try_from(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// `COUNT(*)` comes back as a signed `INTEGER`.
pub(crate) fn decode_total(raw: i64) -> Result<u64, StorageError> {
    u64::try_from(raw).map_err(|err| StorageError::Database(sqlx::Error::Decode(Box::new(err))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_roundtrip_timestamp_exactly() {
        let ts = hbnb_domain::time::now();
        let decoded = decode_timestamp(&encode_timestamp(&ts)).unwrap();
        assert_eq!(decoded, ts);
    }

    #[test]
    fn should_roundtrip_extra_attributes() {
        let mut extra = Extra::new();
        extra.insert("wifi".to_string(), json!(true));
        let decoded = decode_extra(&encode_extra(&extra).unwrap()).unwrap();
        assert_eq!(decoded, extra);
    }

    #[test]
    fn should_reject_negative_count() {
        assert!(decode_count(-1).is_err());
        assert_eq!(decode_count(3).unwrap(), 3);
    }

    #[test]
    fn should_reject_negative_total() {
        assert!(decode_total(-1).is_err());
        assert_eq!(decode_total(0).unwrap(), 0);
    }
}
