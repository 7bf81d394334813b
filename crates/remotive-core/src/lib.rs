pub mod config;
pub mod logging;

pub mod export;
pub mod fetch;
pub mod jobs;
pub mod normalize;
pub mod pipeline;
