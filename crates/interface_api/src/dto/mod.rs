//! Request and response bodies

pub mod forms;
pub mod tool_calls;
pub mod underwriting;
