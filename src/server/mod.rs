//! Discord bot, spreadsheet client and liveness endpoint.
//!
//! The backend is event-driven glue between two external services. A slash
//! command opens a modal on Discord, and the submitted text is appended as a
//! row to the first worksheet of a Google Sheets spreadsheet.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity client, event handler and the `report` command
//! - **Service** (`service/`) - Turns a submission into a sheet row
//! - **Data** (`data/`) - Google Sheets and Drive API access
//! - **Model** (`model/`) - Domain types such as `ReportRow`
//! - **Error** (`error/`) - Startup-fatal and per-request error types
//! - **Controller** (`controller/`) - HTTP handlers for the liveness endpoint
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Application context handed to the bot handler
//! - **Startup** (`startup`) - Tracing, spreadsheet connection, liveness server
//! - **Router** (`router`) - Axum route configuration
//!
//! # Startup Flow
//!
//! 1. **Config** is loaded from the environment and fails fast on missing values
//! 2. **Data** authenticates and opens the first worksheet of the spreadsheet
//! 3. **Router** is served on a background task for uptime pings
//! 4. **Bot** connects to the gateway and registers the command on ready

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
