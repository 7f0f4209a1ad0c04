use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Get a Command for kb with no configuration from the outer environment
pub fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    for var in [
        "KB_PATH",
        "KB_EX_PATH",
        "KB_COLORS",
        "KB_EDITOR",
        "EDITOR",
        "VISUAL",
        "KB_LOG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A knowledge tree on disk:
///
/// ```text
/// kb/
///   todo.md  readme.txt  diagram.png
///   dev/html.md
///   ex/tar  ex/rsync
///   ex/.web/tar  ex/.web/curl
/// ```
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempdir().unwrap();
        let fixture = Self { dir };
        for (file, content) in [
            ("todo.md", "# todo\nbuy milk\n"),
            ("readme.txt", "read me\n"),
            ("diagram.png", "\u{0}\u{0}png"),
            ("dev/html.md", "# html\n<p>term</p>\n"),
            ("ex/tar", "# tar\ntar xzf archive.tgz\n"),
            ("ex/rsync", "alpha\nbeta term gamma\n"),
            ("ex/.web/tar", "# tar\nfetched tar\n"),
            ("ex/.web/curl", "# curl\ncurl -O url\n"),
        ] {
            fixture.write(file, content);
        }
        fixture
    }

    pub fn kb_path(&self) -> &Path {
        self.dir.path()
    }

    pub fn ex_path(&self) -> PathBuf {
        self.dir.path().join("ex")
    }

    pub fn write(&self, file: &str, content: &str) {
        let path = self.dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// kb configured for this tree through the environment
    pub fn kb(&self) -> Command {
        let mut cmd = kb();
        cmd.env("KB_PATH", self.kb_path()).env("KB_EX_PATH", self.ex_path());
        cmd
    }
}
