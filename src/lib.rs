pub mod audit;
pub mod commands;
pub mod configuration;
pub mod errors;
pub mod mcp;
pub mod probe;
pub mod report;
pub mod sink;
pub mod telemetry;
