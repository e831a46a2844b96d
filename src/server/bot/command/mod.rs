//! Slash commands exposed by the bot.

pub mod report;

use serenity::all::{Command, Context, CreateCommand};

/// All commands this bot registers.
pub fn commands() -> Vec<CreateCommand> {
    vec![report::register()]
}

/// Replaces the application's global commands with `commands()`.
pub async fn register_commands(ctx: &Context) -> Result<Vec<Command>, serenity::Error> {
    Command::set_global_commands(&ctx.http, commands()).await
}
