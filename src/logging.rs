use std::fs::{self, OpenOptions};

use log::LevelFilter;
use simplelog::WriteLogger;

use crate::config::Config;

/// Route the `log` facade to the configured file.
///
/// Best-effort: stdout belongs to the user, so any failure here just leaves
/// logging disabled.
pub fn init(config: &Config) {
    if config.log_level == LevelFilter::Off {
        return;
    }
    let Some(path) = config.log_file.as_ref() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = WriteLogger::init(config.log_level, simplelog::Config::default(), file);
}
