//! PDF Merger Library
//!
//! Interactive merging of a folder of PDF files. This library provides:
//! - Discovery of candidate files in a folder
//! - An ordered file list with stable entry handles
//! - A keyboard-driven session for reordering the list
//! - Merging the final order into a single PDF
//!
//! # Example
//!
//! ```
//! use pdf_merger::input::Key;
//! use pdf_merger::order::OrderedFileList;
//! use pdf_merger::session::ReorderSession;
//!
//! let mut list = OrderedFileList::from_paths(["b.pdf", "a.pdf", "c.pdf"]);
//! let mut session = ReorderSession::new(&list).unwrap();
//!
//! // Pick up "b.pdf" and move it down one place
//! session.handle(&mut list, Key::Toggle);
//! session.handle(&mut list, Key::Down);
//!
//! assert_eq!(
//!     list.paths(),
//!     vec![
//!         std::path::PathBuf::from("a.pdf"),
//!         std::path::PathBuf::from("b.pdf"),
//!         std::path::PathBuf::from("c.pdf"),
//!     ]
//! );
//! ```

pub mod app;
pub mod config;
pub mod console;
pub mod discover;
pub mod error;
pub mod input;
pub mod order;
pub mod output;
pub mod pdf;
pub mod render;
pub mod session;
pub mod viewer;

// Re-export commonly used items
pub use config::Config;
pub use error::{Error, Result};
