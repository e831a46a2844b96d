//! Test fixtures providing reusable, inert test data.
//!
//! Fixtures never reach external services. The service-account key parses like
//! a real one but its private key is not usable for signing.

pub mod service_account;
