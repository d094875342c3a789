use honeyscope_core::conf::CONFIG_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary Cowrie log directory.
pub struct LogDir {
    dir: TempDir,
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp log dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write one JSON line per entry, newline terminated like Cowrie does.
    pub fn write(&self, name: &str, lines: &[String]) -> PathBuf {
        let mut text = lines.join("\n");
        text.push('\n');
        self.write_raw(name, &text)
    }

    pub fn write_raw(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, text).expect("failed to write log fixture");
        path
    }
}

/// Write `honeyscope.hcl` into `root`.
pub fn write_config(root: &Path, body: &str) {
    fs::write(root.join(CONFIG_FILE), body).expect("failed to write config fixture");
}

pub fn connect_line(at: &str, session: &str, src_ip: &str) -> String {
    format!(
        r#"{{"eventid":"cowrie.session.connect","src_ip":"{src_ip}","src_port":40022,"dst_ip":"10.0.0.5","dst_port":2222,"session":"{session}","protocol":"ssh","message":"New connection","sensor":"honeypot-1","timestamp":"{at}"}}"#
    )
}

pub fn command_line(at: &str, session: &str, input: &str) -> String {
    format!(
        r#"{{"eventid":"cowrie.command.input","input":"{input}","message":"CMD: {input}","sensor":"honeypot-1","src_ip":"203.0.113.9","session":"{session}","timestamp":"{at}"}}"#
    )
}

pub fn closed_line(at: &str, session: &str) -> String {
    format!(
        r#"{{"eventid":"cowrie.session.closed","duration":4.2,"message":"Connection lost","sensor":"honeypot-1","session":"{session}","timestamp":"{at}"}}"#
    )
}
