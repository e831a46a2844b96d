use serenity::all::{Context, Interaction};

use crate::server::{bot::command::report, state::AppState};

/// Routes an interaction to the command it belongs to.
///
/// Each interaction is handled independently; there is no queuing or
/// deduplication between them.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => match command.data.name.as_str() {
            report::COMMAND_NAME => report::open_form(&ctx, &command).await,
            name => tracing::warn!("Received unknown command: {}", name),
        },
        Interaction::Modal(modal) => match modal.data.custom_id.as_str() {
            report::MODAL_ID => report::handle_submit(state, &ctx, &modal).await,
            custom_id => tracing::warn!("Received unknown modal: {}", custom_id),
        },
        _ => {}
    }
}
