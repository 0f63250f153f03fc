//! Storage layer for the address book
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod book;
pub mod file_io;

pub use book::{load_book, save_book, BookStore};
pub use file_io::{read_json, write_json_atomic};
