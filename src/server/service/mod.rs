//! Business logic between the bot handlers and the data layer.

pub mod report;
