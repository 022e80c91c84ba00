use teloxide::types::{ChatId, Recipient};

/// The three secrets the watcher cannot run without, read once at startup
/// and handed to the components that need them.
#[derive(Debug, Clone)]
pub struct Settings {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat: Recipient,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let practicum_token = non_empty_var("PRACTICUM_TOKEN");
        let telegram_token = non_empty_var("TELEGRAM_TOKEN");
        let chat_id = non_empty_var("TELEGRAM_CHAT_ID");

        let (Some(practicum_token), Some(telegram_token), Some(chat_id)) =
            (practicum_token, telegram_token, chat_id)
        else {
            anyhow::bail!(
                "не заданы переменные окружения: {}",
                missing_keys().join(", ")
            );
        };

        let Some(chat) = parse_chat(&chat_id) else {
            anyhow::bail!(
                "TELEGRAM_CHAT_ID должен быть числом или @именем канала, получено {chat_id:?}"
            );
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            chat,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}

fn missing_keys() -> Vec<&'static str> {
    ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"]
        .into_iter()
        .filter(|key| non_empty_var(key).is_none())
        .collect()
}

fn parse_chat(raw: &str) -> Option<Recipient> {
    if let Ok(id) = raw.parse::<i64>() {
        return Some(Recipient::Id(ChatId(id)));
    }
    if raw.starts_with('@') && raw.len() > 1 {
        return Some(Recipient::ChannelUsername(raw.to_string()));
    }
    None
}
