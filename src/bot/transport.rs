//! Outbound operations the handlers perform on the messaging transport

use anyhow::Result;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::{ApiError, RequestError};

/// The message a button press came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTarget {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// Operations the navigator's output is applied through.
///
/// Implemented for [`Bot`]; tests provide a recording implementation.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send a new message, optionally with inline buttons
    async fn reply_with_buttons(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    /// Replace the text of an existing message
    async fn edit_text(&self, target: MessageTarget, text: &str) -> Result<()>;

    /// Replace the buttons of an existing message; `None` removes them
    async fn edit_buttons(
        &self,
        target: MessageTarget,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()>;

    /// Clear the pending indicator on the pressed button
    async fn acknowledge(&self, query_id: &CallbackQueryId) -> Result<()>;
}

#[async_trait]
impl ChatTransport for Bot {
    async fn reply_with_buttons(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let mut request = self.send_message(chat_id, text).parse_mode(ParseMode::Html);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        Ok(())
    }

    async fn edit_text(&self, target: MessageTarget, text: &str) -> Result<()> {
        let result = self
            .edit_message_text(target.chat_id, target.message_id, text)
            .parse_mode(ParseMode::Html)
            .await;
        ignore_not_modified(result)
    }

    async fn edit_buttons(
        &self,
        target: MessageTarget,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<()> {
        let request = self.edit_message_reply_markup(target.chat_id, target.message_id);
        let result = match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await,
            None => request.await,
        };
        ignore_not_modified(result)
    }

    async fn acknowledge(&self, query_id: &CallbackQueryId) -> Result<()> {
        self.answer_callback_query(query_id.clone()).await?;
        Ok(())
    }
}

/// Treat an edit that leaves the message unchanged as applied.
///
/// A text edit without markup already strips the inline keyboard, so the
/// following button removal on a leaf screen reports "message is not modified".
pub fn ignore_not_modified<T>(result: Result<T, RequestError>) -> Result<()> {
    match result {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}
