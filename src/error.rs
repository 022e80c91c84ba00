/// Everything that can go wrong inside one polling iteration.
///
/// All five kinds share the same recovery path: the loop logs them, relays
/// the text to Telegram at most once per run, and keeps polling. Display
/// texts are user-facing and end up inside the relayed message.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("API ведет себя незапланированно: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Ответ не в формате JSON: {0}")]
    Format(#[source] reqwest::Error),
    #[error("{0}")]
    Shape(&'static str),
    #[error("Ключа {0} нет в ответе API")]
    FieldMissing(&'static str),
    #[error("Неизвестный статус домашней работы: {0:?}")]
    UnknownStatus(String),
}
