use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use crate::bot::BotError;

/* Common utilites for handlers. */

pub type HandlerResult = Result<(), BotError>;

// Prepares a HTML message to the given chat.
pub fn send_bot_message(
    bot: &Bot,
    chat_id: ChatId,
    text: impl Into<String>,
) -> <Bot as Requester>::SendMessage {
    bot.send_message(chat_id, text)
        .parse_mode(ParseMode::Html)
}

// Identifies the sender for logs. Service messages have no sender.
pub fn sender_id(msg: &Message) -> String {
    match msg.from() {
        Some(user) => user.id.0.to_string(),
        None => "unknown".to_string(),
    }
}
