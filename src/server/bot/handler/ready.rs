//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. It fires
//! again after a full reconnect, so one-time work is guarded.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Register the slash commands once per process lifetime

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration is best-effort: a failure is logged as a warning and the bot
/// keeps running, possibly with a missing or stale command.
///
/// # Arguments
/// - `registered` - Flag shared across ready events of this process
/// - `ctx` - Discord context for the registration request
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(registered: &AtomicBool, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if !claim_registration(registered) {
        tracing::debug!("Slash commands already registered, skipping");
        return;
    }

    match command::register_commands(&ctx).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::warn!("Failed to register global commands: {}", e),
    }
}

/// Returns `true` for the first caller only.
pub fn claim_registration(registered: &AtomicBool) -> bool {
    !registered.swap(true, Ordering::SeqCst)
}
