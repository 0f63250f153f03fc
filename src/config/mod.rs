//! Configuration module for the address book
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AddressBookPaths;
pub use settings::Settings;
