//! Library side of the `claims` runner: logging setup and the run pipeline.

pub mod logging;
pub mod pipeline;
