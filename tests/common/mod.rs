//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use replydraft::config::Config;
use replydraft::ui::controller::FormController;
use replydraft::ui::form::{FormIntent, TextEdit, TextField};
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Config with the processing backend switched off.
pub fn offline_config() -> Config {
    let mut config = Config::default();
    config.backend.enabled = false;
    config
}

/// Controller with `text` typed into the input field.
pub fn controller_with_input(text: &str) -> FormController {
    let mut controller = FormController::new();
    controller.dispatch(FormIntent::Edit {
        field: TextField::Input,
        edit: TextEdit::InsertStr(text.to_string()),
    });
    controller
}
