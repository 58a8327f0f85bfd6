//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, UserId};
use tracing::{debug, warn};

use crate::errors::BotError;
use crate::navigator::{Navigator, ScreenView};

use super::transport::{ChatTransport, MessageTarget};

/// A button press, detached from the teloxide update it arrived in
#[derive(Debug, Clone)]
pub struct ButtonPress {
    pub query_id: CallbackQueryId,
    pub user_id: UserId,
    /// Message carrying the pressed button, if Telegram still exposes it
    pub target: Option<MessageTarget>,
    pub data: Option<String>,
}

impl From<&CallbackQuery> for ButtonPress {
    fn from(q: &CallbackQuery) -> Self {
        Self {
            query_id: q.id.clone(),
            user_id: q.from.id,
            target: q.message.as_ref().map(|msg| MessageTarget {
                chat_id: msg.chat().id,
                message_id: msg.id(),
            }),
            data: q.data.clone(),
        }
    }
}

/// Handle callback queries from inline keyboards
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    navigator: Arc<Navigator>,
) -> Result<()> {
    handle_button_press(&bot, &navigator, ButtonPress::from(&q)).await
}

/// Route a button press, edit the originating message, then acknowledge.
///
/// Unroutable identifiers and failed edits are logged and dropped. The
/// acknowledgment is sent in every case.
pub async fn handle_button_press<T>(
    transport: &T,
    navigator: &Navigator,
    press: ButtonPress,
) -> Result<()>
where
    T: ChatTransport + ?Sized,
{
    let data = press.data.as_deref().unwrap_or("");
    debug!(user_id = %press.user_id, callback_data = data, "Received callback query from user");

    match navigator.route(data) {
        Ok(view) => match press.target {
            Some(target) => match apply_screen(transport, target, &view).await {
                Ok(()) => {
                    debug!(user_id = %press.user_id, screen = ?view.screen, "Screen updated");
                }
                Err(e) => {
                    warn!(user_id = %press.user_id, screen = ?view.screen, error = %e, "Lost screen update");
                }
            },
            None => {
                debug!(user_id = %press.user_id, "Callback query has no message to edit");
            }
        },
        Err(e) => {
            debug!(user_id = %press.user_id, error = %e, "Ignoring callback query");
        }
    }

    // Answer the callback query to remove the loading state
    if let Err(e) = transport.acknowledge(&press.query_id).await {
        warn!(user_id = %press.user_id, error = %e, "Failed to answer callback query");
    }

    Ok(())
}

/// Replace the message text, then its buttons.
///
/// Both edits are attempted; the first failure is reported.
pub async fn apply_screen<T>(
    transport: &T,
    target: MessageTarget,
    view: &ScreenView,
) -> Result<(), BotError>
where
    T: ChatTransport + ?Sized,
{
    let text_result = transport.edit_text(target, &view.text).await;
    let buttons_result = transport.edit_buttons(target, view.keyboard.clone()).await;

    text_result
        .and(buttons_result)
        .map_err(|e| BotError::TransportEdit(e.to_string()))
}
