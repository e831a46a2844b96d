//! Test factories for modal submit interactions.
//!
//! Discord sends `member` for submissions made inside a guild and only `user`
//! for submissions from a DM. Serenity copies `member.user` into `user` while
//! deserializing, so both shapes resolve the same way tests expect.

use serde_json::{json, Value};
use serenity::all::ModalInteraction;

use super::modal::create_test_text_input_row;

const GUILD_ID: &str = "100000000000000001";

fn test_user(username: &str, global_name: Option<&str>) -> Value {
    json!({
        "id": "200000000000000001",
        "username": username,
        "global_name": global_name,
        "avatar": null,
    })
}

fn test_modal_interaction(
    guild_id: Option<&str>,
    member: Option<Value>,
    user: Option<Value>,
) -> ModalInteraction {
    let mut interaction = json!({
        "id": "300000000000000001",
        "application_id": "400000000000000001",
        "type": 5,
        "data": {
            "custom_id": "report_modal",
            "components": [create_test_text_input_row("content", Some("Server down"))],
        },
        "channel_id": "500000000000000001",
        "token": "test-interaction-token",
        "version": 1,
        "locale": "ja",
        "entitlements": [],
        "attachment_size_limit": 10485760,
    });

    if let Some(guild_id) = guild_id {
        interaction["guild_id"] = json!(guild_id);
    }
    if let Some(member) = member {
        interaction["member"] = member;
    }
    if let Some(user) = user {
        interaction["user"] = user;
    }

    serde_json::from_value(interaction)
        .expect("Failed to create test modal interaction - invalid JSON structure")
}

/// Creates a modal submission made by a guild member.
///
/// # Arguments
/// - `username` - Account username
/// - `global_name` - Account-wide display name, if set
/// - `nick` - Guild nickname, if set
///
/// # Returns
/// - `ModalInteraction` - Submission carrying `member` and `guild_id`
///
/// # Panics
/// - If the JSON cannot be deserialized into a ModalInteraction (indicates invalid test data)
pub fn create_test_modal_interaction(
    username: &str,
    global_name: Option<&str>,
    nick: Option<&str>,
) -> ModalInteraction {
    let member = json!({
        "user": test_user(username, global_name),
        "nick": nick,
        "roles": [],
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "deaf": false,
        "mute": false,
        "flags": 0,
    });

    test_modal_interaction(Some(GUILD_ID), Some(member), None)
}

/// Creates a modal submission made from a DM, where Discord sends no member.
///
/// # Panics
/// - If the JSON cannot be deserialized into a ModalInteraction (indicates invalid test data)
pub fn create_test_dm_modal_interaction(
    username: &str,
    global_name: Option<&str>,
) -> ModalInteraction {
    test_modal_interaction(None, None, Some(test_user(username, global_name)))
}
