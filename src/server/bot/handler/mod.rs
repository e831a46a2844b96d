use std::sync::atomic::AtomicBool;

use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::server::state::AppState;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    commands_registered: AtomicBool,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            commands_registered: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.commands_registered, ctx, ready).await;
    }

    /// Called for slash commands and modal submissions
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(&self.state, ctx, interaction).await;
    }
}
