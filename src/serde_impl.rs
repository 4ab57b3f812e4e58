//! Serde support. [`Maybe`] serializes exactly like a nullable value, so
//! stored rows round-trip unchanged; `Outcome` and `Errors` use their
//! derived tagged representations.

use crate::maybe::Maybe;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Some(value) => serializer.serialize_some(value),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Maybe::from_nullable)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Errors;
    use crate::maybe::{none, some, Maybe};
    use crate::outcome::{failure, success, Outcome};

    #[test]
    fn test_maybe_serializes_as_nullable() {
        assert_eq!(serde_json::to_string(&some(1)).unwrap(), "1");
        assert_eq!(serde_json::to_string(&none::<i32>()).unwrap(), "null");
    }

    #[test]
    fn test_maybe_round_trips() {
        let present: Maybe<String> = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(present, some(String::from("a")));

        let absent: Maybe<String> = serde_json::from_str("null").unwrap();
        assert_eq!(absent, none());
    }

    #[test]
    fn test_outcome_round_trips() {
        let outcome: Outcome<i32, String> = success(1);
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, outcome);

        let failed: Outcome<i32, String> = failure(String::from("e"));
        let encoded = serde_json::to_string(&failed).unwrap();
        let decoded: Outcome<i32, String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, failed);
    }

    #[test]
    fn test_errors_round_trip() {
        let errors: Errors<String> = Errors::Many(vec![String::from("a"), String::from("b")]);
        let encoded = serde_json::to_string(&errors).unwrap();
        let decoded: Errors<String> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, errors);
    }
}
