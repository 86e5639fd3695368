//! Core domain types and logic.

pub mod config_loader;
pub mod config_path;
pub mod error;
pub mod load_report;
pub mod section_selector;
