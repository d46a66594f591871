//! Reports module for the expense tracker
//!
//! Provides the spending-by-category analysis behind every chart view.

pub mod spending;

pub use spending::{CategoryTotal, SpendingReport};
