#![allow(clippy::expect_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| tempfile::tempdir().expect("failed to create config dir for tests"))
        .path()
}

/// Create a `reqline` command isolated from the user's configuration and
/// environment.
pub fn reqline_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("reqline"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("REQLINE_CONFIG", config_dir().join("absent.toml"));
    cmd.env_remove("REQLINE_COLOR");
    cmd.env_remove("REQLINE_ADDRESS");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A `reqline` command reading the given config file.
#[allow(dead_code)]
pub fn reqline_cmd_with_config(config: &Path) -> Command {
    let mut cmd = reqline_cmd();
    cmd.env("REQLINE_CONFIG", config);
    cmd
}
