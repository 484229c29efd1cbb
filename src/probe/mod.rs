pub mod catalog;
pub mod executor;
pub mod runner;
pub mod spec;

pub use executor::{CommandExecutor, CommandOutput, ShellExecutor};
pub use runner::ProbeRunner;
pub use spec::{load_probe_file, ProbeKind, ProbeSpec};
