pub mod error;
pub mod grade;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod stats;
pub mod utility;
