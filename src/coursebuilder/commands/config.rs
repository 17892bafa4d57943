use crate::commands::{CmdMessage, CmdResult, CoursePaths};
use crate::config::CourseConfig;
use crate::error::Result;
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CoursePaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    match action {
        ConfigAction::ShowAll => {
            let config = CourseConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CourseConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CourseConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
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
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> CoursePaths {
        CoursePaths {
            project: Some(temp.path().join(".coursebuilder")),
            global: temp.path().join("global"),
        }
    }

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let set = run(
            &paths,
            Scope::Project,
            ConfigAction::Set("storage-key".into(), "spring".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].content, "storage-key set to spring");

        let shown = run(
            &paths,
            Scope::Project,
            ConfigAction::ShowKey("storage-key".into()),
        )
        .unwrap();
        assert_eq!(shown.messages[0].content, "spring");

        // Global scope is untouched
        let global = run(&paths, Scope::Global, ConfigAction::ShowAll).unwrap();
        assert_eq!(global.config.unwrap(), CourseConfig::default());
    }

    #[test]
    fn unknown_key_is_reported() {
        let temp = TempDir::new().unwrap();
        let result = run(
            &paths(&temp),
            Scope::Project,
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!temp.path().join(".coursebuilder").exists());
    }
}
