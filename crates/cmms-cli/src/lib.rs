//! CLI library components for the CMMS validation toolkit.

pub mod batch;
pub mod input;
pub mod logging;
pub mod report;
