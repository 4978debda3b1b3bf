//! common

mod param;

pub use param::*;
