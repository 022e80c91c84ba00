use serde_json::Value;

use crate::error::WatchError;

/// The closed set of review states the service reports. Anything else is an
/// UnknownStatus error, never a silent skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    pub fn from_api(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Builds the notification sentence for one homework record.
pub fn status_line(homework: &Value) -> Result<String, WatchError> {
    let status_value = require_field(homework, "status")?;
    let name_value = require_field(homework, "homework_name")?;

    let status = status_value
        .as_str()
        .and_then(ReviewStatus::from_api)
        .ok_or_else(|| WatchError::UnknownStatus(render(status_value)))?;
    let name = render(name_value);

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

fn require_field<'a>(homework: &'a Value, key: &'static str) -> Result<&'a Value, WatchError> {
    homework.get(key).ok_or(WatchError::FieldMissing(key))
}

// Strings render bare; any other JSON value renders as its JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn each_known_status_gets_its_verdict() {
        let cases = [
            (
                "approved",
                "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!",
            ),
            (
                "reviewing",
                "Изменился статус проверки работы \"hw1\". Работа взята на проверку ревьюером.",
            ),
            (
                "rejected",
                "Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания.",
            ),
        ];
        for (status, expected) in cases {
            let homework = json!({"status": status, "homework_name": "hw1"});
            assert_eq!(status_line(&homework).unwrap(), expected);
        }
    }

    #[test]
    fn missing_status_key_is_reported() {
        let homework = json!({"homework_name": "hw1"});
        let err = status_line(&homework).unwrap_err();
        assert!(matches!(err, WatchError::FieldMissing("status")));
        assert_eq!(err.to_string(), "Ключа status нет в ответе API");
    }

    #[test]
    fn missing_name_key_is_reported() {
        let homework = json!({"status": "approved"});
        let err = status_line(&homework).unwrap_err();
        assert!(matches!(err, WatchError::FieldMissing("homework_name")));
    }

    #[test]
    fn unknown_status_is_reported_with_value() {
        let homework = json!({"status": "unknown_status", "homework_name": "hw2"});
        let err = status_line(&homework).unwrap_err();
        match err {
            WatchError::UnknownStatus(value) => assert_eq!(value, "unknown_status"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn non_string_status_is_unknown() {
        let homework = json!({"status": 5, "homework_name": "hw1"});
        let err = status_line(&homework).unwrap_err();
        assert!(matches!(err, WatchError::UnknownStatus(_)));
    }

    #[test]
    fn non_string_name_still_renders() {
        let homework = json!({"status": "reviewing", "homework_name": 7});
        let line = status_line(&homework).unwrap();
        assert!(line.starts_with("Изменился статус проверки работы \"7\"."));
    }
}
