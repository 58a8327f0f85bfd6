//! # Coffee Perk Telegram Bot
//!
//! A menu-driven Telegram bot for the Coffee Perk café: the user picks a
//! language, then browses static information (menu, opening hours,
//! location, contact, pre-orders) through inline buttons.

pub mod bot;
pub mod config;
pub mod content;
pub mod errors;
pub mod localization;
pub mod navigator;
pub mod observability;
