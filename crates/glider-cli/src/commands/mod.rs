pub mod batch;
pub mod metrics;
pub mod solve;
