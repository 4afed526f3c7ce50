pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[test]
    fn test_should_parse_formatted_date() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2024-03-01T10:20:30.5"}"#).expect("should parse");
        assert_eq!("2024-03-01T10:20:30.500", stamped.at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string());
        let json = serde_json::to_string(&stamped).expect("should serialize");
        assert_eq!(r#"{"at":"2024-03-01T10:20:30.500"}"#, json);
    }

    #[test]
    fn test_should_reject_bad_date() {
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"yesterday"}"#).is_err());
    }
}
