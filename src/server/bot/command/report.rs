//! The `report` slash command and its modal form.
//!
//! Flow: the command opens a modal with a single paragraph input; submitting
//! the modal appends `[display name, text]` to the sheet and answers with an
//! ephemeral success or failure message.

use serenity::all::{
    ActionRow, ActionRowComponent, CommandInteraction, Context, CreateActionRow, CreateCommand,
    CreateInputText, CreateInteractionResponse, CreateInteractionResponseMessage, CreateModal,
    InputTextStyle, ModalInteraction,
};

use crate::server::{
    data::ReportSheet, model::report::ReportRow, service::report::ReportService,
    state::AppState,
};

pub const COMMAND_NAME: &str = "report";
pub const MODAL_ID: &str = "report_modal";
pub const CONTENT_INPUT_ID: &str = "content";

const COMMAND_DESCRIPTION: &str = "Opens report form.";
const COMMAND_DESCRIPTION_JA: &str = "報告フォームを開きます。";
const MODAL_TITLE: &str = "報告フォーム";
const CONTENT_LABEL: &str = "報告内容";
const CONTENT_PLACEHOLDER: &str = "報告内容を入力してください";

pub const SUCCESS_MESSAGE: &str = "報告を記録しました！";
const MISSING_CONTENT: &str = "報告内容が入力されていません";

/// Result of a modal submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded,
    /// Carries the error detail shown to the user.
    Failed(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Recorded => SUCCESS_MESSAGE.to_string(),
            Self::Failed(detail) => format!("エラーが発生しました: {}", detail),
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description(COMMAND_DESCRIPTION)
        .description_localized("ja", COMMAND_DESCRIPTION_JA)
}

pub fn modal() -> CreateModal {
    let content = CreateInputText::new(InputTextStyle::Paragraph, CONTENT_LABEL, CONTENT_INPUT_ID)
        .placeholder(CONTENT_PLACEHOLDER)
        .required(true);

    CreateModal::new(MODAL_ID, MODAL_TITLE).components(vec![CreateActionRow::InputText(content)])
}

/// Responds to the command by showing the report modal.
pub async fn open_form(ctx: &Context, command: &CommandInteraction) {
    let response = CreateInteractionResponse::Modal(modal());

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to open report form for {}: {}", command.user.name, e);
    }
}

/// Records a submitted modal and acknowledges it privately.
pub async fn handle_submit(state: &AppState, ctx: &Context, modal: &ModalInteraction) {
    let outcome = submit(
        state.sheet.as_ref(),
        display_name(modal),
        submitted_content(&modal.data.components),
    )
    .await;

    let response = CreateInteractionResponse::Message(reply(&outcome));

    if let Err(e) = modal.create_response(&ctx.http, response).await {
        tracing::error!("Failed to reply to report from {}: {}", modal.user.name, e);
    }
}

/// Appends the report and decides the outcome shown to the user.
///
/// A submission without text is rejected without touching the sheet.
pub async fn submit(
    sheet: &dyn ReportSheet,
    display_name: String,
    content: Option<String>,
) -> SubmitOutcome {
    let Some(content) = content else {
        tracing::warn!("Report from {} had no content", display_name);
        return SubmitOutcome::Failed(MISSING_CONTENT.to_string());
    };

    match ReportService::new(sheet)
        .record(ReportRow::new(display_name, content))
        .await
    {
        Ok(()) => SubmitOutcome::Recorded,
        Err(e) => {
            tracing::error!("Failed to record report: {}", e);
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

/// Ephemeral reply for an outcome.
pub fn reply(outcome: &SubmitOutcome) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(outcome.message())
        .ephemeral(true)
}

/// Value of the report text input, if present.
pub fn submitted_content(rows: &[ActionRow]) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == CONTENT_INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
}

/// Name shown for the submitter: guild nickname, then global name, then username.
pub fn display_name(modal: &ModalInteraction) -> String {
    modal
        .member
        .as_ref()
        .map_or_else(|| modal.user.display_name(), |member| member.display_name())
        .to_string()
}
