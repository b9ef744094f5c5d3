use crate::error::AppError;
use crate::models::AppSettings;
use crate::storage;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.toml";

/// `settings.toml` inside the app data directory
pub fn default_settings_path() -> PathBuf {
    storage::app_data_dir().join(SETTINGS_FILE)
}

/// Stored settings, or the defaults when nothing was saved yet
pub fn load_settings(path: &Path) -> Result<AppSettings, AppError> {
    Ok(storage::load_toml::<AppSettings>(path)?.unwrap_or_default())
}

/// Like [`load_settings`] but logs and falls back to the defaults on error
pub fn load_settings_or_default(path: &Path) -> AppSettings {
    load_settings(path).unwrap_or_else(|e| {
        log::error!("Failed to load settings: {}", e);
        AppSettings::default()
    })
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<(), AppError> {
    storage::save_toml(path, settings)?;
    log::info!("Settings saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReminderTime;

    #[test]
    fn test_load_missing_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = AppSettings {
            reminders_enabled: true,
            lunch_reminder: ReminderTime::new(11, 45),
            calorie_warning: false,
            ..Default::default()
        };

        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "lunch_reminder = \"99:99\"").unwrap();
        assert!(load_settings(&path).is_err());
        assert_eq!(load_settings_or_default(&path), AppSettings::default());
    }
}
