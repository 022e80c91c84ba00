use serde_json::Value;
use tracing::debug;

use crate::error::WatchError;

/// The server's clock, sent back as `current_date`. The loop advances its
/// poll cursor to this value so the next fetch asks only for newer data.
pub fn server_date(body: &Value) -> Option<i64> {
    body.get("current_date")?.as_i64()
}

/// Returns element 0 of the `homeworks` list. Later entries are ignored:
/// the service orders homeworks newest first and only the latest change is
/// relayed.
pub fn latest_homework(body: &Value) -> Result<&Value, WatchError> {
    debug!("Проверка ответа API на корректность");
    let body = body
        .as_object()
        .ok_or(WatchError::Shape("Ответ API не словарь, а что-то другое"))?;
    let homeworks = body
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(WatchError::Shape("В ответе API нет списка homeworks"))?;
    homeworks.first().ok_or(WatchError::Shape(
        "В ответе API нет домашней работы, ты запушил?",
    ))
}
