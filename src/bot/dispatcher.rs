use teloxide::{prelude::*, utils::command::BotCommands, RequestError};

use super::handler::{action_help, action_start, action_symbol, invalid_state};
use crate::config::Config;

/* Dispatcher wires incoming updates to the handlers.
 * Known commands go to their actions, any other text message is treated as a symbol,
 * and everything else is dropped silently.
 * Concurrency, delivery and polling are left to teloxide.
 */

#[derive(thiserror::Error, Debug)]
pub enum BotError {
    #[error("Request error: {0}")]
    RequestError(RequestError),
}

impl From<RequestError> for BotError {
    fn from(request_error: RequestError) -> BotError {
        BotError::RequestError(request_error)
    }
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bot.")]
    Start,
    #[command(description = "Show this help message.")]
    Help,
}

// Text that is not a command is a symbol candidate. Unknown commands are ignored.
pub fn is_symbol_candidate(text: &str) -> bool {
    !text.trim_start().starts_with('/')
}

// Shows the commands in the Telegram menu. Not fatal if it fails.
async fn register_commands(bot: &Bot) {
    if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
        log::error!("Failed to register bot commands: {}", err);
    }
}

/* Main Dispatch function */
pub async fn run_dispatcher(bot: Bot, config: Config) {
    use dptree::case;

    register_commands(&bot).await;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Start].endpoint(action_start))
        .branch(case![Command::Help].endpoint(action_help));

    let text_handler = dptree::filter(|msg: Message| msg.text().is_some_and(is_symbol_candidate))
        .endpoint(action_symbol);

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(text_handler)
        .branch(dptree::endpoint(invalid_state));

    Dispatcher::builder(bot, message_handler)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

#[cfg(test)]
mod tests {
    use teloxide::utils::command::BotCommands;

    use super::{is_symbol_candidate, Command};

    #[test]
    fn test_is_symbol_candidate() {
        assert!(is_symbol_candidate("TCS"));
        assert!(is_symbol_candidate("reliance.ns"));
        assert!(!is_symbol_candidate("/start"));
        assert!(!is_symbol_candidate("/unknown TCS"));
    }

    #[test]
    fn test_parse_commands() {
        assert!(matches!(Command::parse("/start", "bot"), Ok(Command::Start)));
        assert!(matches!(Command::parse("/help", "bot"), Ok(Command::Help)));
        assert!(matches!(
            Command::parse("/start@bot", "bot"),
            Ok(Command::Start)
        ));
        assert!(Command::parse("/chart", "bot").is_err());
        assert!(Command::parse("TCS", "bot").is_err());
    }
}
