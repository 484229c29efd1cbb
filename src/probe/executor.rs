use async_trait::async_trait;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CommandExecutor — abstraction for running shell commands
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The most informative single line for a result detail: first line of
    /// stderr on failure, first line of stdout otherwise.
    pub fn summary_line(&self) -> String {
        let source = if self.success() || self.stderr.trim().is_empty() {
            &self.stdout
        } else {
            &self.stderr
        };
        source.lines().next().unwrap_or("").trim().to_string()
    }
}

/// Abstraction over shell command execution.
///
/// Production: `ShellExecutor` runs commands via `tokio::process::Command`.
/// Tests: mock executors script outcomes without side effects.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// Production executor — actually runs the probed commands.
pub struct ShellExecutor;

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn execute(&self, program: &str, args: &[String]) -> std::io::Result<CommandOutput> {
        let output = tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
