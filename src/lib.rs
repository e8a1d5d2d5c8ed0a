//! saku-cli - Terminal mobile-banking prototype
//!
//! This library provides the core functionality for saku, a mock mobile
//! banking app rebuilt for the terminal. All financial data is an in-memory
//! seed dataset; the only persistence is a small display-preference file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the preference file
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, bills, ...)
//! - `data`: The read-only seed dataset
//! - `storage`: JSON preference storage
//! - `store`: The mutable application state over the seed data
//! - `reports`: Pure derived summaries (portfolio, cash flow, bill schedule)
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: CLI command handlers
//! - `tui`: The interactive tab-based shell
//!
//! # Example
//!
//! ```rust,ignore
//! use saku::data::Dataset;
//! use saku::reports::PortfolioReport;
//!
//! let data = Dataset::seed();
//! let report = PortfolioReport::generate(&data.accounts);
//! println!("{}", report.total_non_credit);
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;
pub mod tui;

pub use error::SakuError;
