//! Embassy tasks

pub mod control;
pub mod status_log;

pub use control::control_task;
pub use status_log::status_log_task;
