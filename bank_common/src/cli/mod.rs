//! Building blocks for console front ends

pub mod constants;
pub mod helpers;

pub use helpers::Console;
