// Platform-specific camera and gallery access for meal photos
//
// On Android the host MainActivity exposes launchImagePicker/launchCamera and
// publishes the outcome through static getLastPhotoPath/getLastError, which are
// polled here. Other platforms report PlatformNotSupported.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum PickerError {
    PermissionDenied(String),
    Timeout(String),
    Cancelled(String),
    PlatformNotSupported(String),
    Other(String),
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            PickerError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            PickerError::Cancelled(msg) => write!(f, "Cancelled: {}", msg),
            PickerError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            PickerError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for PickerError {}

const DEFAULT_MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Which activity flow to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSource {
    Gallery,
    Camera,
}

impl PhotoSource {
    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    fn launch_method(&self) -> &'static str {
        match self {
            PhotoSource::Gallery => "launchImagePicker",
            PhotoSource::Camera => "launchCamera",
        }
    }

    #[cfg_attr(not(target_os = "android"), allow(dead_code))]
    fn timeout_message(&self) -> &'static str {
        match self {
            PhotoSource::Gallery => "Image picker timeout - no selection made",
            PhotoSource::Camera => "Camera timeout - no photo taken",
        }
    }
}

/// Picker settings
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/MainActivity")
    pub main_activity_class: String,
    /// How long to wait for the user before giving up
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            main_activity_class: DEFAULT_MAIN_ACTIVITY_CLASS.to_string(),
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl PickerConfig {
    /// Number of polls that fit into the timeout (at least one)
    pub fn poll_attempts(&self) -> u32 {
        let interval = self.poll_interval.as_millis().max(1);
        ((self.timeout.as_millis() / interval) as u32).max(1)
    }
}

#[cfg(target_os = "android")]
mod android {
    use super::{PhotoSource, PickerConfig, PickerError};
    use jni::objects::{JClass, JObject, JString, JValue};
    use jni::JNIEnv;
    use ndk_context::android_context;
    use std::path::PathBuf;

    fn jni_err(context: &str) -> impl Fn(jni::errors::Error) -> PickerError + '_ {
        move |e| PickerError::PermissionDenied(format!("{}: {}", context, e))
    }

    fn app_class_loader<'a>(env: &mut JNIEnv<'a>) -> Result<JObject<'a>, PickerError> {
        let at_cls = env
            .find_class("android/app/ActivityThread")
            .map_err(jni_err("ActivityThread not found"))?;
        let at = env
            .call_static_method(
                &at_cls,
                "currentActivityThread",
                "()Landroid/app/ActivityThread;",
                &[],
            )
            .map_err(jni_err("currentActivityThread failed"))?
            .l()
            .map_err(jni_err("currentActivityThread invalid"))?;

        let app = env
            .call_method(&at, "getApplication", "()Landroid/app/Application;", &[])
            .map_err(jni_err("getApplication failed"))?
            .l()
            .map_err(jni_err("getApplication invalid"))?;

        let context = if app.is_null() {
            env.call_method(&at, "getSystemContext", "()Landroid/app/ContextImpl;", &[])
                .map_err(jni_err("getSystemContext failed"))?
                .l()
                .map_err(jni_err("getSystemContext invalid"))?
        } else {
            app
        };

        env.call_method(&context, "getClassLoader", "()Ljava/lang/ClassLoader;", &[])
            .map_err(jni_err("getClassLoader failed"))?
            .l()
            .map_err(jni_err("getClassLoader invalid"))
    }

    fn load_class<'a>(
        env: &mut JNIEnv<'a>,
        loader: &JObject<'a>,
        fq_slash: &str,
    ) -> Result<JClass<'a>, PickerError> {
        let name: JString = env
            .new_string(fq_slash.replace('/', "."))
            .map_err(jni_err("new_string failed"))?;
        let cls_obj = env
            .call_method(
                loader,
                "loadClass",
                "(Ljava/lang/String;)Ljava/lang/Class;",
                &[JValue::Object(&JObject::from(name))],
            )
            .map_err(jni_err("ClassLoader.loadClass failed"))?
            .l()
            .map_err(jni_err("loadClass invalid"))?;
        Ok(JClass::from(cls_obj))
    }

    fn companion_instance<'a>(
        env: &mut JNIEnv<'a>,
        cls: &JClass<'a>,
        config: &PickerConfig,
        signature: &str,
    ) -> Result<JObject<'a>, PickerError> {
        let comp_signature = format!("L{}$Companion;", config.main_activity_class);
        let companion = env
            .get_static_field(cls, "Companion", &comp_signature)
            .map_err(jni_err("Failed to get Companion field"))?
            .l()
            .map_err(jni_err("Companion field invalid"))?;

        if companion.is_null() {
            return Err(PickerError::PermissionDenied(
                "MainActivity.Companion is null, activity not initialized?".to_string(),
            ));
        }

        env.call_method(&companion, "getInstance", signature, &[])
            .map_err(jni_err("Companion.getInstance() failed"))?
            .l()
            .map_err(jni_err("Companion.getInstance() invalid"))
    }

    fn activity_instance<'a>(
        env: &mut JNIEnv<'a>,
        config: &PickerConfig,
    ) -> Result<(JObject<'a>, JClass<'a>), PickerError> {
        let loader = app_class_loader(env)?;
        let cls = load_class(env, &loader, &config.main_activity_class)?;
        let signature = format!("()L{};", config.main_activity_class);

        let instance = match env.call_static_method(&cls, "getInstance", &signature, &[]) {
            Ok(val) => val.l().map_err(jni_err("getInstance() invalid"))?,
            Err(_) => {
                if env.exception_check().unwrap_or(false) {
                    let _ = env.exception_clear();
                }
                let field = env
                    .get_static_field(&cls, "instance", &signature)
                    .ok()
                    .and_then(|f| f.l().ok())
                    .filter(|obj| !obj.is_null());
                match field {
                    Some(obj) => obj,
                    None => companion_instance(env, &cls, config, &signature)?,
                }
            }
        };

        if instance.is_null() {
            return Err(PickerError::PermissionDenied(
                "MainActivity instance is null, activity not initialized?".to_string(),
            ));
        }

        Ok((instance, cls))
    }

    fn static_string(
        env: &mut JNIEnv<'_>,
        cls: &JClass<'_>,
        method: &str,
    ) -> Result<Option<String>, PickerError> {
        let Ok(result) = env.call_static_method(cls, method, "()Ljava/lang/String;", &[]) else {
            return Ok(None);
        };
        let Ok(obj) = result.l() else {
            return Ok(None);
        };
        if obj.is_null() {
            return Ok(None);
        }
        let value: String = env
            .get_string((&obj).into())
            .map_err(jni_err("String conversion failed"))?
            .into();
        Ok(Some(value))
    }

    fn attach() -> Result<jni::JavaVM, PickerError> {
        let vm_ptr = android_context().vm() as *mut *const jni::sys::JNIInvokeInterface_;
        unsafe { jni::JavaVM::from_raw(vm_ptr) }.map_err(jni_err("JavaVM failed"))
    }

    pub fn launch_and_wait(
        config: &PickerConfig,
        source: PhotoSource,
    ) -> Result<PathBuf, PickerError> {
        let vm = attach()?;
        let mut env = vm
            .attach_current_thread()
            .map_err(jni_err("JNI attach failed"))?;

        let (activity, main_cls) = activity_instance(&mut env, config)?;

        env.call_static_method(&main_cls, "clearLastError", "()V", &[])
            .map_err(jni_err("clearLastError failed"))?;
        env.call_method(&activity, source.launch_method(), "()V", &[])
            .map_err(jni_err(source.launch_method()))?;

        for _ in 0..config.poll_attempts() {
            std::thread::sleep(config.poll_interval);

            if let Some(path) = static_string(&mut env, &main_cls, "getLastPhotoPath")? {
                log::debug!("Photo selected: {}", path);
                return Ok(PathBuf::from(path));
            }
            if let Some(err) = static_string(&mut env, &main_cls, "getLastError")? {
                if err.to_ascii_lowercase().contains("cancel") {
                    return Err(PickerError::Cancelled(err));
                }
                return Err(PickerError::PermissionDenied(err));
            }
        }

        Err(PickerError::Timeout(source.timeout_message().to_string()))
    }

    pub fn has_camera_permission(config: &PickerConfig) -> Result<bool, PickerError> {
        let vm = attach()?;
        let mut env = vm
            .attach_current_thread()
            .map_err(jni_err("JNI attach failed"))?;
        let (activity, _cls) = activity_instance(&mut env, config)?;

        env.call_method(&activity, "hasCameraPermission", "()Z", &[])
            .map_err(jni_err("hasCameraPermission failed"))?
            .z()
            .map_err(jni_err("Boolean conversion failed"))
    }
}

/// Open the gallery or camera and block until a photo path is available
#[cfg(target_os = "android")]
pub fn acquire_photo(config: &PickerConfig, source: PhotoSource) -> Result<PathBuf, PickerError> {
    android::launch_and_wait(config, source)
}

#[cfg(not(target_os = "android"))]
pub fn acquire_photo(_config: &PickerConfig, source: PhotoSource) -> Result<PathBuf, PickerError> {
    let what = match source {
        PhotoSource::Gallery => "Image picker",
        PhotoSource::Camera => "Camera",
    };
    log::debug!("{} requested on a platform without one", what);
    Err(PickerError::PlatformNotSupported(format!(
        "{} not available on this platform",
        what
    )))
}

#[cfg(target_os = "android")]
pub fn has_camera_permission(config: &PickerConfig) -> Result<bool, PickerError> {
    android::has_camera_permission(config)
}

#[cfg(not(target_os = "android"))]
pub fn has_camera_permission(_config: &PickerConfig) -> Result<bool, PickerError> {
    Ok(false)
}

/// Pick a single image from the gallery (60 s timeout by default)
pub async fn pick_image(config: PickerConfig) -> Result<PathBuf, PickerError> {
    run_blocking(config, PhotoSource::Gallery).await
}

/// Capture a photo with the camera (60 s timeout by default)
pub async fn capture_photo(config: PickerConfig) -> Result<PathBuf, PickerError> {
    run_blocking(config, PhotoSource::Camera).await
}

async fn run_blocking(config: PickerConfig, source: PhotoSource) -> Result<PathBuf, PickerError> {
    tokio::task::spawn_blocking(move || acquire_photo(&config, source))
        .await
        .map_err(|e| PickerError::Other(format!("Task join error: {}", e)))?
}
