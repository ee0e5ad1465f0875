pub mod app;
pub mod config;
pub mod evens;
pub mod input;
pub mod report;
pub mod tracing_init;

pub use evens::{checked_sum_evens, filter_evens, is_even, sum_evens, SumError};
