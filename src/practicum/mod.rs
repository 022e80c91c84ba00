mod client;
mod response;
mod status;

pub use client::Client;
pub use response::{latest_homework, server_date};
pub use status::status_line;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
