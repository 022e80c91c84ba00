use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::{debug, error, info};

/// The outbound message seam. The watcher only ever pushes text through
/// this; nothing is consumed from Telegram.
#[allow(async_fn_in_trait)]
pub trait Notify {
    async fn notify(&self, text: &str);
}

pub struct Notifier {
    bot: Bot,
    chat: Recipient,
}

impl Notifier {
    pub fn new(token: &str, chat: Recipient) -> Self {
        Self {
            bot: Bot::new(token),
            chat,
        }
    }
}

impl Notify for Notifier {
    /// Best effort: a failed send is logged and swallowed, it never stops
    /// the watch loop.
    async fn notify(&self, text: &str) {
        debug!("Отправляем сообщение в телеграм: {text}");
        match self.bot.send_message(self.chat.clone(), text).await {
            Ok(_) => info!("Сообщение отправлено: {text}"),
            Err(err) => error!("Ошибка отправки сообщения: {err}"),
        }
    }
}
