use crate::models::{AppSettings, FoodLog, FoodLogUpdate, NewFoodLog, ProfileUpdate, UserProfile};
use crate::navigation::{NavigationError, Router, Screen};
use crate::services::food_log_service;
use crate::services::settings_service;
use crate::services::Backend;
use calorie_api::ApiError;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

pub const LOAD_FAILED: &str = "Failed to load user data";
pub const ADD_FAILED: &str = "Failed to add food log";
pub const PROFILE_FAILED: &str = "Failed to update profile";
pub const DELETE_FAILED: &str = "Failed to delete food log";
pub const UPDATE_FAILED: &str = "Failed to update food log";

/// Everything the screens render from; owned by the [`Controller`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub router: Router,
    pub profile: Option<UserProfile>,
    /// Newest first
    pub food_logs: Vec<FoodLog>,
    pub loading: bool,
    /// Message of the global error banner
    pub error: Option<String>,
    pub settings: AppSettings,
}

impl SessionState {
    pub fn new(authenticated: bool, settings: AppSettings) -> Self {
        Self {
            router: Router::new(Screen::initial(authenticated)),
            settings,
            ..Default::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    fn clear_user(&mut self) {
        self.profile = None;
        self.food_logs.clear();
        self.loading = false;
    }
}

/// Shared cell holding the [`SessionState`]
///
/// The app keeps the state in a Dioxus signal so writes re-render; tests use a
/// plain `Rc<RefCell<_>>`.
pub trait StateCell: Clone + 'static {
    fn read_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;
    fn write_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R;
}

impl StateCell for Signal<SessionState> {
    fn read_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        self.with_peek(f)
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

impl StateCell for Rc<RefCell<SessionState>> {
    fn read_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.borrow())
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Requests screens send to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(Screen),
    Back,
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
    },
    Logout,
    /// Fetch profile and food logs again
    Reload,
    AddFoodLog(NewFoodLog),
    UpdateProfile(ProfileUpdate),
    DeleteFoodLog(i64),
    UpdateFoodLog(i64, FoodLogUpdate),
    SaveSettings(AppSettings),
    DismissError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Completed,
    /// The local profile was updated; `persisted` tells whether the backend accepted it
    ProfileSaved { persisted: bool },
    Failed(String),
}

/// Mediates every screen change and every mutation of the session
#[derive(Clone)]
pub struct Controller<S: StateCell> {
    backend: Arc<dyn Backend>,
    state: S,
    settings_path: Option<PathBuf>,
}

impl<S: StateCell> Controller<S> {
    pub fn new(backend: Arc<dyn Backend>, state: S, settings_path: Option<PathBuf>) -> Self {
        Self {
            backend,
            state,
            settings_path,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn navigate(&self, target: Screen) -> Result<Screen, NavigationError> {
        self.state.write_state(|s| s.router.dispatch(target))
    }

    pub fn back(&self) -> Result<Screen, NavigationError> {
        self.state.write_state(|s| s.router.back())
    }

    fn fail(&self, message: &str) -> CommandOutcome {
        self.state.write_state(|s| {
            s.loading = false;
            s.error = Some(message.to_string());
        });
        CommandOutcome::Failed(message.to_string())
    }

    fn start(&self) {
        self.state.write_state(|s| s.loading = true);
    }

    pub async fn dispatch(&self, command: Command) -> CommandOutcome {
        log::debug!("Dispatch {}", command_name(&command));
        match command {
            Command::Navigate(target) => match self.navigate(target) {
                Ok(_) => CommandOutcome::Completed,
                Err(e) => CommandOutcome::Failed(e.to_string()),
            },
            Command::Back => match self.back() {
                Ok(_) => CommandOutcome::Completed,
                Err(e) => CommandOutcome::Failed(e.to_string()),
            },
            Command::Login { email, password } => self.login(&email, &password).await,
            Command::Signup {
                name,
                email,
                password,
            } => self.signup(&name, &email, &password).await,
            Command::Logout => {
                self.logout();
                CommandOutcome::Completed
            }
            Command::Reload => self.load_user_data().await,
            Command::AddFoodLog(log) => self.add_food_log(log).await,
            Command::UpdateProfile(update) => self.update_profile(update).await,
            Command::DeleteFoodLog(id) => self.delete_food_log(id).await,
            Command::UpdateFoodLog(id, update) => self.update_food_log(id, update).await,
            Command::SaveSettings(settings) => self.save_settings(settings),
            Command::DismissError => {
                self.state.write_state(|s| s.error = None);
                CommandOutcome::Completed
            }
        }
    }

    /// Loads profile and food logs together; does nothing without a token
    pub async fn load_user_data(&self) -> CommandOutcome {
        if !self.backend.is_authenticated() {
            return CommandOutcome::Completed;
        }
        self.start();

        let (profile, logs) =
            tokio::join!(self.backend.get_profile(), self.backend.get_food_logs());
        match (profile, logs) {
            (Ok(profile), Ok(logs)) => {
                log::info!("Loaded profile and {} food logs", logs.len());
                self.state.write_state(|s| {
                    s.profile = Some(profile);
                    s.food_logs = logs;
                    s.loading = false;
                    s.error = None;
                });
                CommandOutcome::Completed
            }
            (profile, logs) => {
                let unauthorized = matches!(profile, Err(ApiError::Unauthorized))
                    || matches!(logs, Err(ApiError::Unauthorized));
                if let Err(e) = &profile {
                    log::error!("Loading profile failed: {}", e);
                }
                if let Err(e) = &logs {
                    log::error!("Loading food logs failed: {}", e);
                }
                if unauthorized {
                    log::warn!("Session expired, signing out");
                    self.backend.logout();
                    self.state.write_state(|s| {
                        s.clear_user();
                        s.router.reset(Screen::Welcome);
                    });
                }
                self.fail(LOAD_FAILED)
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> CommandOutcome {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return self.fail("Please enter email and password");
        }
        self.start();

        match self.backend.login(email, password).await {
            Ok(auth) => {
                log::info!("Logged in as {}", auth.user.email);
                let logs = self.backend.get_food_logs().await;
                self.state.write_state(|s| {
                    s.profile = Some(auth.user);
                    s.error = None;
                    match logs {
                        Ok(logs) => s.food_logs = logs,
                        Err(e) => {
                            log::error!("Loading food logs failed: {}", e);
                            s.error = Some(LOAD_FAILED.to_string());
                        }
                    }
                    s.loading = false;
                    s.router.reset(Screen::Dashboard);
                });
                CommandOutcome::Completed
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                self.fail(&e.to_string())
            }
        }
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> CommandOutcome {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return self.fail("Please fill in all fields");
        }
        self.start();

        match self.backend.signup(name, email, password).await {
            Ok(auth) => {
                log::info!("Signed up as {}", auth.user.email);
                self.state.write_state(|s| {
                    s.profile = Some(auth.user);
                    s.food_logs.clear();
                    s.loading = false;
                    s.error = None;
                    s.router.reset(Screen::SetupProfile);
                });
                CommandOutcome::Completed
            }
            Err(e) => {
                log::warn!("Signup failed: {}", e);
                self.fail(&e.to_string())
            }
        }
    }

    pub fn logout(&self) {
        self.backend.logout();
        self.state.write_state(|s| {
            s.clear_user();
            s.error = None;
            s.router.reset(Screen::Welcome);
        });
        log::info!("Logged out");
    }

    async fn add_food_log(&self, log: NewFoodLog) -> CommandOutcome {
        if let Err(e) = food_log_service::validate(&log) {
            return self.fail(&e.user_message());
        }
        self.start();

        match self.backend.add_food_log(&log).await {
            Ok(saved) => {
                log::info!("Logged {} ({} kcal)", saved.name, saved.calories);
                self.state.write_state(|s| {
                    s.food_logs.insert(0, saved);
                    s.loading = false;
                    s.error = None;
                    if matches!(s.router.current(), Screen::QuickLog | Screen::ManualLog) {
                        if let Err(e) = s.router.dispatch(Screen::Dashboard) {
                            log::warn!("{}", e);
                        }
                    }
                });
                CommandOutcome::Completed
            }
            Err(e) => {
                log::error!("Adding food log failed: {}", e);
                self.fail(ADD_FAILED)
            }
        }
    }

    /// The change is applied locally even when the backend rejects it
    async fn update_profile(&self, update: ProfileUpdate) -> CommandOutcome {
        self.start();
        let result = self.backend.update_profile(&update).await;

        let persisted = result.is_ok();
        self.state.write_state(|s| {
            match result {
                Ok(profile) => {
                    s.profile = Some(profile);
                    s.error = None;
                }
                Err(e) => {
                    log::error!("Updating profile failed: {}", e);
                    s.profile
                        .get_or_insert_with(UserProfile::default)
                        .merge(&update);
                    s.error = Some(PROFILE_FAILED.to_string());
                }
            }
            s.loading = false;
        });
        CommandOutcome::ProfileSaved { persisted }
    }

    async fn delete_food_log(&self, id: i64) -> CommandOutcome {
        self.start();
        match self.backend.delete_food_log(id).await {
            Ok(()) => {
                log::info!("Deleted food log {}", id);
                self.state.write_state(|s| {
                    s.food_logs.retain(|log| log.id != id);
                    s.loading = false;
                    s.error = None;
                });
                CommandOutcome::Completed
            }
            Err(e) => {
                log::error!("Deleting food log {} failed: {}", id, e);
                self.fail(DELETE_FAILED)
            }
        }
    }

    /// Merges the sent fields into the local entry, not the server's echo
    async fn update_food_log(&self, id: i64, update: FoodLogUpdate) -> CommandOutcome {
        if let Err(e) = food_log_service::validate_update(&update) {
            return self.fail(&e.user_message());
        }
        self.start();

        match self.backend.update_food_log(id, &update).await {
            Ok(_) => {
                self.state.write_state(|s| {
                    if let Some(log) = s.food_logs.iter_mut().find(|log| log.id == id) {
                        log.merge(&update);
                    }
                    s.loading = false;
                    s.error = None;
                });
                CommandOutcome::Completed
            }
            Err(e) => {
                log::error!("Updating food log {} failed: {}", id, e);
                self.fail(UPDATE_FAILED)
            }
        }
    }

    fn save_settings(&self, settings: AppSettings) -> CommandOutcome {
        self.state.write_state(|s| s.settings = settings.clone());
        let Some(path) = &self.settings_path else {
            return CommandOutcome::Completed;
        };
        match settings_service::save_settings(path, &settings) {
            Ok(()) => CommandOutcome::Completed,
            Err(e) => {
                log::error!("Saving settings failed: {}", e);
                self.fail(&e.user_message())
            }
        }
    }
}

/// Command name without payload, so passwords never reach the log
fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Navigate(_) => "navigate",
        Command::Back => "back",
        Command::Login { .. } => "login",
        Command::Signup { .. } => "signup",
        Command::Logout => "logout",
        Command::Reload => "reload",
        Command::AddFoodLog(_) => "add-food-log",
        Command::UpdateProfile(_) => "update-profile",
        Command::DeleteFoodLog(_) => "delete-food-log",
        Command::UpdateFoodLog(..) => "update-food-log",
        Command::SaveSettings(_) => "save-settings",
        Command::DismissError => "dismiss-error",
    }
}
