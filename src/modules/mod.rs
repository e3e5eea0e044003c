pub mod config;
pub mod dynamo;
pub mod error;
pub mod loader;
pub mod parser;
