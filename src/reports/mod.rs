//! Reports over an account's history

pub mod category;

pub use category::{CategoryReport, CategoryTotals};
