//! Common types and utilities shared across pagetree.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (the tree order and its derived capacities)
//! - Error types
//! - Identifiers (PageId)

pub mod config;
pub mod error;
mod page_id;

pub use config::Order;
pub use error::{Error, Result, Violation};
pub use page_id::PageId;
