use std::fs;
use std::path::Path;

use moarse_core::settings;
use moarse_session::EditSession;

use super::config_ops::load_settings;
use super::die;
use crate::replay;

pub fn replay(script_file: &Path, config: Option<&Path>, json: bool) {
    let content = die!(
        fs::read_to_string(script_file),
        "Error reading {}: {}",
        script_file.display()
    );
    let events = die!(replay::parse_script(&content), "Error: {}");

    let mut session = match config {
        Some(path) => EditSession::from_settings(&die!(load_settings(path), "Error: {}")),
        None => EditSession::from_settings(settings::settings()),
    };
    let outcome = replay::run(&mut session, events);

    if json {
        println!("{}", die!(serde_json::to_string(&outcome), "Error: {}"));
    } else {
        println!("events:      {}", outcome.events);
        println!("emitted:     {}", outcome.emitted);
        println!("code:        {}", outcome.code.trim_end());
        println!("translation: {}", outcome.translation);
    }
}
