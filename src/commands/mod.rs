//! CLI commands for kb

pub mod copy;
pub mod create;
pub mod delete;
pub mod dirs;
pub mod dispatch;
pub mod edit;
pub mod fetch;
pub mod format;
pub mod list;
pub mod search;
pub mod show;
