//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{ChatId, Me};
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

use crate::navigator::Navigator;

use super::transport::ChatTransport;

/// Commands the bot answers
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the greeting and language picker
    Start,
}

/// Parse a command addressed to this bot.
///
/// The command name and the `@mention` are matched case-insensitively.
/// Anything after the first word, such as a deep-link payload, is ignored.
pub fn parse_command(text: &str, bot_username: &str) -> Option<Command> {
    let command = text.split_whitespace().next()?.to_lowercase();
    Command::parse(&command, &bot_username.to_lowercase()).ok()
}

/// Reply to the start command with the greeting and language picker
pub async fn handle_start<T>(transport: &T, navigator: &Navigator, chat_id: ChatId) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    let view = navigator.on_start();
    transport
        .reply_with_buttons(chat_id, &view.text, view.keyboard)
        .await
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    me: Me,
    navigator: Arc<Navigator>,
) -> Result<()> {
    let command = msg.text().and_then(|text| parse_command(text, me.username()));

    match command {
        Some(Command::Start) => {
            info!(user_id = %msg.chat.id, "Received start command");
            handle_start(&bot, &navigator, msg.chat.id).await
        }
        _ => {
            debug!(user_id = %msg.chat.id, "Ignoring message without a handler");
            Ok(())
        }
    }
}
