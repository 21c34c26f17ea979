pub mod cli;
pub mod conf;
pub mod error;
pub mod logging;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod sequence;
pub mod session;

pub use error::StatsError;
