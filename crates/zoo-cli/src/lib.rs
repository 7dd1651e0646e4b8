//! CLI library components for the zookeeper report pipeline.

pub mod logging;
pub mod pipeline;
