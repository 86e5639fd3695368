#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const METER_INI: &str = r#"
[MQTT]
host = 127.0.0.1
port = 1883
client_id = meter-01

[MQTT_TOPICS]
power = meter/power
energy = meter/energy

[MARIADB_DATABASE]
host = db.local
user = meter
password = s3cret
"#;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Project tree `<root>/SERVER/Python_interface` with `content` at `<root>/config.ini`.
/// Returns the temp dir and the anchor directory.
pub fn project_tree(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let anchor = dir.path().join("SERVER").join("Python_interface");
    fs::create_dir_all(&anchor).unwrap();
    fs::write(dir.path().join("config.ini"), content).unwrap();
    (dir, anchor)
}

pub fn rewrite(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}
