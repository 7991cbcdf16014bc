use crate::commands::{CmdMessage, CmdResult};
use crate::config::RecipeBoxConfig;
use crate::error::{RecipeError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RecipeBoxConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RecipeBoxConfig::load(config_dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| RecipeError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = RecipeBoxConfig::load(config_dir)?;
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(RecipeBoxConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("ingredient-separator".into(), ";".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let loaded = RecipeBoxConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.ingredient_separator, ';');
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));

        let err = run(dir.path(), ConfigAction::Set("nope".into(), "1".into())).unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }

    #[test]
    fn bad_value_is_an_error_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let err = run(
            dir.path(),
            ConfigAction::Set("ingredient-separator".into(), ";;".into()),
        )
        .unwrap_err();
        assert!(matches!(err, RecipeError::Config(_)));
        assert!(!dir.path().join(crate::config::CONFIG_FILENAME).exists());
    }
}
