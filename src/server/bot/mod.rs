//! Discord bot integration for the report form.
//!
//! This module provides the Serenity client and its event handler. The bot
//! registers a single global slash command, `report`, which opens a modal form;
//! the submitted text is recorded to the spreadsheet and acknowledged with an
//! ephemeral reply.
//!
//! The bot runs on the main task after the liveness endpoint has been spawned.
//! Serenity dispatches every event on its own task, so a slow spreadsheet append
//! never blocks other interactions.
//!
//! # Gateway Intents
//!
//! Slash commands and modal submissions arrive as interactions, which need no
//! privileged intents. Only `GUILDS` is requested.

pub mod command;
pub mod handler;
pub mod start;
