mod parser;
mod reader;
mod types;

pub use parser::LineParser;
pub use reader::LogReader;
pub use types::{LogScan, Request};
