//! Report Bot Test Utils
//!
//! Provides shared testing utilities for the report bot. Nothing here touches the
//! network: Serenity objects are deserialized from JSON the way Discord would
//! send them, and credentials are inert fixtures.
//!
//! # Overview
//!
//! - **serenity**: Factories for Serenity structs received in interactions
//! - **fixture**: Static test data such as a service-account key document
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_modal_rows;
//!
//! #[test]
//! fn reads_modal_value() {
//!     let rows = create_test_modal_rows("content", Some("Server down"));
//!     // Pass rows to the code reading ModalInteractionData::components...
//! }
//! ```

pub mod fixture;
pub mod serenity;
