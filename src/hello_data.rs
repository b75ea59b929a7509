use serde::{Deserialize, Serialize};

use crate::strings::{DEMO_AGE, DEMO_USERNAME};

/// The small record the structured endpoints exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloData {
    pub username: String,
    pub age: i32,
}

impl HelloData {
    /// Fixed demo values, same on every call.
    pub fn demo() -> Self {
        Self {
            username: DEMO_USERNAME.to_string(),
            age: DEMO_AGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_record_serializes_to_expected_json() {
        let json = serde_json::to_string(&HelloData::demo()).unwrap();
        assert_eq!(json, r#"{"username":"userA","age":20}"#);
    }

    #[test]
    fn round_trips_through_json() {
        let data: HelloData = serde_json::from_str(r#"{"username":"userB","age":7}"#).unwrap();
        assert_eq!(data.username, "userB");
        assert_eq!(data.age, 7);
    }
}
