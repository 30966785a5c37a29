use reqwest::Url;
use teloxide::{prelude::*, types::ChatId, utils::html};

use crate::{
    bot::processor::{normalize_symbol, search_url, ProcessError, Symbol},
    config::Config,
};

use super::{
    constants::{DISCLAIMER_MESSAGE, INVALID_SYMBOL_MESSAGE},
    utils::{send_bot_message, sender_id, HandlerResult},
};

/* Reply to a single text message, decided before anything is sent. */
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Snapshot { symbol: Symbol, text: String },
    Rejection { reason: ProcessError, text: String },
}

/* Composes the snapshot reply for a validated symbol.
 * The symbol is purely alphabetic and the URL is encoded, so neither needs HTML escaping.
 */
pub fn compose_reply(symbol: &Symbol, base_url: &Url) -> String {
    let url = search_url(base_url, symbol);
    format!(
        "📊 {} — Market Snapshot\n\n🔍 {}\n👉 {}\n\n{}",
        html::bold(symbol.ticker()),
        html::bold("View detailed charts &amp; indicators:"),
        html::link(url.as_str(), url.as_str()),
        html::italic(DISCLAIMER_MESSAGE)
    )
}

/* Decides how to answer a text message.
 * Blank text gets no reply at all.
 */
pub fn reply_for_text(text: &str, base_url: &Url) -> Option<Reply> {
    match normalize_symbol(text) {
        Ok(None) => None,
        Ok(Some(symbol)) => {
            let text = compose_reply(&symbol, base_url);
            Some(Reply::Snapshot { symbol, text })
        }
        Err(reason) => Some(Reply::Rejection {
            reason,
            text: INVALID_SYMBOL_MESSAGE.to_string(),
        }),
    }
}

/* Prepares the outgoing message for a reply.
 * Snapshots are HTML with the link preview shown. Rejections go out as plain text.
 */
pub fn reply_request(
    bot: &Bot,
    chat_id: ChatId,
    reply: &Reply,
) -> <Bot as Requester>::SendMessage {
    match reply {
        Reply::Snapshot { text, .. } => {
            send_bot_message(bot, chat_id, text.clone()).disable_web_page_preview(false)
        }
        Reply::Rejection { text, .. } => bot.send_message(chat_id, text.clone()),
    }
}

/* Symbol lookup.
 * Any text message that is not a command is treated as a candidate symbol.
 */
pub async fn action_symbol(bot: Bot, msg: Message, config: Config) -> HandlerResult {
    let text = match msg.text() {
        Some(text) => text,
        None => return Ok(()),
    };

    let reply = match reply_for_text(text, &config.base_url) {
        Some(reply) => reply,
        None => return Ok(()),
    };

    reply_request(&bot, msg.chat.id, &reply).await?;

    match reply {
        Reply::Snapshot { symbol, .. } => log::info!(
            "Symbol - Link for {} sent to user {} in chat {}",
            symbol,
            sender_id(&msg),
            msg.chat.id.0
        ),
        Reply::Rejection { reason, .. } => log::info!(
            "Symbol - Rejected input from user {} in chat {}: {}",
            sender_id(&msg),
            msg.chat.id.0,
            reason
        ),
    }
    Ok(())
}
