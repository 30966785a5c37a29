use teloxide::{prelude::*, utils::command::BotCommands, utils::html};

use crate::bot::dispatcher::Command;

use super::{
    constants::{DISCLAIMER_MESSAGE, GREETING_MESSAGE, USAGE_EXAMPLES_MESSAGE},
    utils::{send_bot_message, sender_id, HandlerResult},
};

/* Invalid state.
 * Invoked for anything that is neither a known command nor a text message,
 * e.g. stickers, photos, service messages or unknown commands.
 * Simply does not respond. Reduces spam.
 */
pub async fn invalid_state(_bot: Bot, _msg: Message) -> HandlerResult {
    Ok(())
}

pub fn help_message() -> String {
    let commands = html::escape(&Command::descriptions().to_string());
    format!(
        "⭐️ <b>My Commands</b> ⭐️\n\n{commands}\n\n{USAGE_EXAMPLES_MESSAGE}\n\n{}",
        html::italic(DISCLAIMER_MESSAGE)
    )
}

/* Start command.
 * Displays a welcome message with usage examples to the user.
 */
pub async fn action_start(bot: Bot, msg: Message) -> HandlerResult {
    send_bot_message(&bot, msg.chat.id, GREETING_MESSAGE).await?;

    log::info!(
        "Start - Greeting sent to user {} in chat {}",
        sender_id(&msg),
        msg.chat.id.0
    );
    Ok(())
}

/* Help command.
 * Displays a list of commands available to the user.
 */
pub async fn action_help(bot: Bot, msg: Message) -> HandlerResult {
    send_bot_message(&bot, msg.chat.id, help_message()).await?;

    log::info!(
        "Help - Command list sent to user {} in chat {}",
        sender_id(&msg),
        msg.chat.id.0
    );
    Ok(())
}
