mod config;
mod copy;
mod create;
mod dirs;
mod edit;
mod list;
mod logging;
mod search;
pub mod support;
