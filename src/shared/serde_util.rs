//! Custom serde helpers for backend wire formats.

/// (De)serializes Unix-millis timestamps as `DateTime<Utc>`.
///
/// The reporting endpoints send time-series periods as epoch milliseconds,
/// not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "super::timestamp_ms")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_timestamp_ms_round_trip() {
        let json = r#"{"at":1717200000000}"#;
        let parsed: Stamped = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.at.timestamp_millis(), 1_717_200_000_000);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), json);
    }

    #[test]
    fn test_timestamp_ms_rejects_non_numeric() {
        let json = r#"{"at":"2024-06-01"}"#;
        assert!(serde_json::from_str::<Stamped>(json).is_err());
    }
}
