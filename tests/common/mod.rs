use assert_cmd::Command;
use tempfile::TempDir;

/// Build a `devdoctor` command sandboxed in a temp dir: cwd and dev_root
/// both point at it, so report artifacts land inside and nothing from the
/// host workspace leaks in.
pub fn devdoctor_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("devdoctor").expect("devdoctor binary not found");
    cmd.current_dir(dir.path());
    cmd.env("DEVDOCTOR_DEV_ROOT", dir.path());
    cmd
}
