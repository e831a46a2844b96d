//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_modal_rows, create_test_text_input_row};
//!
//! let mut rows = create_test_modal_rows("content", Some("Server down"));
//! rows.push(create_test_text_input_row("other", None));
//! ```
//!
//! # Available Factories
//!
//! - `modal::create_test_modal_rows` - Components of a submitted modal
//! - `modal::create_test_text_input_row` - A single action row with one text input
//! - `interaction::create_test_modal_interaction` - Modal submission from a guild member
//! - `interaction::create_test_dm_modal_interaction` - Modal submission from a DM

pub mod interaction;
pub mod modal;

pub use interaction::{create_test_dm_modal_interaction, create_test_modal_interaction};
pub use modal::{create_test_modal_rows, create_test_text_input_row};
