//! Expense Tracker - personal expense ledger for the terminal
//!
//! This library provides the core functionality for recording daily
//! expenses, filtering them by month and year, aggregating them per
//! category, charting the result and exporting the ledger to CSV.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, filter selectors, theme)
//! - `storage`: Key-value store and the ledger repository
//! - `services`: Business logic layer (add, delete, filter, summarize)
//! - `display`: Table, summary and chart formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::models::{ExpenseInput, Selector};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let mut storage = Storage::open(&paths)?;
//! let mut service = ExpenseService::new(&mut storage);
//! service.add(&ExpenseInput::new("2024-01-15", "Food", "12.50", "lunch"))?;
//! let view = service.view(Selector::all());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TrackerError, TrackerResult};
