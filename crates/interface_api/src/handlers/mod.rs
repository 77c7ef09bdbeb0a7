//! Request handlers

pub mod forms;
pub mod health;
pub mod tool_calls;
pub mod underwriting;
