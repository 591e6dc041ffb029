use crate::common::file::{FileSpec, create_directory, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const FROM: &str = "from";
pub const TO: &str = "to";

/// Source and target trees differing in every way the comparator reports:
///
/// ```text
/// from/different.txt              5 bytes    to/different.txt          9 bytes
/// from/nonExistingInTo.txt        3 bytes    (absent)
/// from/differentType              file       to/differentType          directory
/// from/folder/different.txt       5 bytes    to/folder/different.txt   9 bytes
/// from/folder/nonExistingInTo.txt 3 bytes    (absent)
/// ```
#[fixture]
pub fn diff_trees_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let from = dir.path().join(FROM);
    let to = dir.path().join(TO);

    write_file(FileSpec::new(from.join("different.txt"), "12345".to_string()));
    write_file(FileSpec::new(from.join("nonExistingInTo.txt"), "123".to_string()));
    write_file(FileSpec::new(from.join("differentType"), "1".to_string()));
    write_file(FileSpec::new(
        from.join("folder").join("different.txt"),
        "12345".to_string(),
    ));
    write_file(FileSpec::new(
        from.join("folder").join("nonExistingInTo.txt"),
        "123".to_string(),
    ));

    write_file(FileSpec::new(to.join("different.txt"), "123456789".to_string()));
    create_directory(&to.join("differentType"));
    write_file(FileSpec::new(
        to.join("folder").join("different.txt"),
        "123456789".to_string(),
    ));

    dir
}

pub fn run_treediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("treediff").expect("Failed to find treediff binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
