//! kb Core Library
//!
//! Resource resolution, search, editing and cheat sheet fetching for the kb
//! knowledge base.

pub mod config;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod format;
pub mod logging;
pub mod ops;
pub mod resource;
pub mod search;
pub mod sniff;
