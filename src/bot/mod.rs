//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `message_handler`: Handles the `/start` command
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards
//! - `transport`: Outbound Telegram operations behind a trait

pub mod callback_handler;
pub mod message_handler;
pub mod transport;
pub mod ui_builder;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

// Re-export main handler functions for use in main.rs
pub use callback_handler::{callback_handler, handle_button_press, ButtonPress};
pub use message_handler::{handle_start, message_handler, parse_command, Command};
pub use transport::{ChatTransport, MessageTarget};

/// Dispatcher schema; handlers expect an `Arc<Navigator>` dependency and the
/// dispatcher-provided `Me`
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler))
}
