use crate::commands::{CmdMessage, CmdResult, DreamzPaths};
use crate::config::DreamzConfig;
use crate::error::{DreamzError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &DreamzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DreamzConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = config.get(&key).ok_or_else(|| unknown_key(&key))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "date-format" => config.set_date_format(&value)?,
                "log-level" => config.set_log_level(&value)?,
                _ => return Err(unknown_key(&key)),
            }
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                config.get(&key).unwrap_or(value.as_str())
            )));
        }
    }

    Ok(result.with_config(config))
}

fn unknown_key(key: &str) -> DreamzError {
    DreamzError::Api(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        DreamzConfig::keys().join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> DreamzPaths {
        DreamzPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_and_show_reads_back() {
        let dir = TempDir::new().unwrap();
        run(
            &paths(&dir),
            ConfigAction::Set("date-format".into(), "%Y-%m-%d".into()),
        )
        .unwrap();

        let result = run(&paths(&dir), ConfigAction::ShowKey("date-format".into())).unwrap();
        assert_eq!(result.messages[0].content, "date-format = %Y-%m-%d");
        assert_eq!(result.config.unwrap().date_format, "%Y-%m-%d");
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(run(&paths(&dir), ConfigAction::ShowKey("color".into())).is_err());
        assert!(run(&paths(&dir), ConfigAction::Set("color".into(), "red".into())).is_err());
    }

    #[test]
    fn invalid_value_is_not_saved() {
        let dir = TempDir::new().unwrap();
        assert!(run(
            &paths(&dir),
            ConfigAction::Set("log-level".into(), "chatty".into())
        )
        .is_err());
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), DreamzConfig::default());
    }
}
