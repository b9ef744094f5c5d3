use crate::error::AppError;
use calorie_api::{ApiError, StoredSession, TokenStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[cfg(target_os = "android")]
fn android_files_dir() -> Option<PathBuf> {
    use jni::{
        objects::{JObject, JString},
        JavaVM,
    };
    unsafe {
        let ctx = ndk_context::android_context();
        let vm = JavaVM::from_raw(ctx.vm().cast()).ok()?;
        let mut env = vm.attach_current_thread().ok()?;
        let activity = JObject::from_raw(ctx.context().cast());
        let files_dir = env
            .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])
            .ok()?
            .l()
            .ok()?;
        let abs_path_obj = env
            .call_method(files_dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
            .ok()?
            .l()
            .ok()?;
        let abs_path_jstring: JString = JString::from(abs_path_obj);
        let abs_path: String = env.get_string(&abs_path_jstring).ok()?.into();
        Some(PathBuf::from(abs_path))
    }
}

/// Get the app data directory for the current platform
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "android")]
    {
        if let Some(dir) = android_files_dir() {
            return dir;
        }
        for d in [
            "/data/user/0/dev.calorietracker.app/files",
            "/data/data/dev.calorietracker.app/files",
        ] {
            let p = PathBuf::from(d);
            if p.exists() {
                return p;
            }
        }
        PathBuf::from("./data")
    }

    #[cfg(not(target_os = "android"))]
    {
        PathBuf::from("./data")
    }
}

/// Read a TOML file; `Ok(None)` when it does not exist
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    toml::from_str(&raw)
        .map(Some)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

/// Write a value as TOML, creating the parent directory
pub fn save_toml<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(value)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    std::fs::write(path, raw)?;
    Ok(())
}

/// Session persisted as `session.toml` (keys `auth_token`, `user_email`)
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `session.toml` inside the app data directory
    pub fn in_app_dir() -> Self {
        Self::new(app_data_dir().join("session.toml"))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<StoredSession, ApiError> {
        load_toml::<StoredSession>(&self.path)
            .map(Option::unwrap_or_default)
            .map_err(|e| ApiError::Storage(e.to_string()))
    }

    fn store(&self, session: &StoredSession) -> Result<(), ApiError> {
        if session.token.is_none() && session.email.is_none() {
            if self.path.exists() {
                std::fs::remove_file(&self.path).map_err(|e| ApiError::Storage(e.to_string()))?;
            }
            return Ok(());
        }
        save_toml(&self.path, session).map_err(|e| ApiError::Storage(e.to_string()))
    }
}
