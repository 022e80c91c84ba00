use std::collections::HashSet;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::WatchError;
use crate::practicum::{self, Client};
use crate::telegram::Notify;

/// The polling loop and all of its state: the poll cursor and the set of
/// error texts already relayed to the chat this run.
pub struct Watcher<N> {
    api: Client,
    notifier: N,
    interval: Duration,
    cursor: i64,
    relayed_errors: HashSet<String>,
}

impl<N: Notify> Watcher<N> {
    pub fn new(api: Client, notifier: N, interval: Duration) -> Self {
        Self {
            api,
            notifier,
            interval,
            cursor: 0,
            relayed_errors: HashSet::new(),
        }
    }

    /// Polls forever. A failed iteration is reported and the loop sleeps
    /// and carries on; nothing here ever terminates the process.
    pub async fn run(&mut self) {
        loop {
            if let Err(err) = self.poll_once().await {
                self.report_failure(&err).await;
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    async fn poll_once(&mut self) -> Result<(), WatchError> {
        let body = self.api.homework_statuses(self.cursor).await?;
        self.handle_response(body).await
    }

    /// One iteration past the fetch: advance the cursor, pick the latest
    /// homework, compose the sentence, push it to the chat. The cursor
    /// advances before extraction, so a malformed body still moves the
    /// window forward.
    async fn handle_response(&mut self, body: Value) -> Result<(), WatchError> {
        if let Some(server_date) = practicum::server_date(&body) {
            debug!(from = self.cursor, to = server_date, "Сдвигаем курсор опроса");
            self.cursor = server_date;
        }
        let homework = practicum::latest_homework(&body)?;
        let message = practicum::status_line(homework)?;
        self.notifier.notify(&message).await;
        Ok(())
    }

    /// Logs every failure; relays each distinct text to the chat once per
    /// run.
    async fn report_failure(&mut self, err: &WatchError) {
        let kind = match err {
            WatchError::Transport(_) => "transport",
            WatchError::Format(_) => "format",
            WatchError::Shape(_) => "shape",
            WatchError::FieldMissing(_) => "field_missing",
            WatchError::UnknownStatus(_) => "unknown_status",
        };
        error!(kind, error = %err, "Сбой в работе программы");
        let message = format!("Сбой в работе программы: {err}");
        if self.relayed_errors.insert(message.clone()) {
            self.notifier.notify(&message).await;
        } else {
            debug!("Об этой ошибке уже сообщали, повторно не отправляем");
        }
    }
}
