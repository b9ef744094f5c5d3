use std::fmt;

/// Screen navigation for the app
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Screen {
    Welcome,
    Login,
    Signup,
    SetupProfile,
    GoalSelection,
    Dashboard,
    QuickLog,
    ManualLog,
    PicLog,
    MealPlan,
    Profile,
    Settings,
}

/// Targets of the bottom navigation bar, in display order
pub const BOTTOM_NAV: [Screen; 4] = [
    Screen::Dashboard,
    Screen::PicLog,
    Screen::MealPlan,
    Screen::Profile,
];

impl Screen {
    pub fn slug(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::SetupProfile => "setup-profile",
            Screen::GoalSelection => "goal-selection",
            Screen::Dashboard => "dashboard",
            Screen::QuickLog => "quick-log",
            Screen::ManualLog => "manual-log",
            Screen::PicLog => "pic-log",
            Screen::MealPlan => "meal-plan",
            Screen::Profile => "profile",
            Screen::Settings => "settings",
        }
    }

    /// Screens reachable from `self` in one step
    pub fn allowed_targets(&self) -> &'static [Screen] {
        use Screen::*;
        match self {
            Welcome => &[Login, Signup],
            Login => &[SetupProfile, Dashboard, Signup, Welcome],
            Signup => &[SetupProfile, Login, Welcome],
            SetupProfile => &[GoalSelection, Signup, Settings],
            GoalSelection => &[Dashboard, SetupProfile, Settings],
            Dashboard => &[QuickLog, ManualLog, PicLog, MealPlan, Profile, Settings],
            QuickLog => &[Dashboard, ManualLog],
            ManualLog => &[Dashboard],
            PicLog => &[Dashboard, MealPlan, Profile, QuickLog],
            MealPlan => &[Dashboard, PicLog, Profile],
            Profile => &[Dashboard, PicLog, MealPlan, Settings],
            Settings => &[Profile, SetupProfile, GoalSelection, Dashboard, Welcome],
        }
    }

    pub fn can_transition_to(&self, target: Screen) -> bool {
        *self == target || self.allowed_targets().contains(&target)
    }

    pub fn shows_bottom_nav(&self) -> bool {
        BOTTOM_NAV.contains(self)
    }

    /// Dashboard when a session token exists at startup, Welcome otherwise
    pub fn initial(authenticated: bool) -> Self {
        if authenticated {
            Screen::Dashboard
        } else {
            Screen::Welcome
        }
    }

    /// Where the back arrow leads when the history has nothing usable
    fn default_back(&self) -> Option<Screen> {
        match self {
            Screen::Login | Screen::Signup => Some(Screen::Welcome),
            Screen::SetupProfile => Some(Screen::Signup),
            Screen::GoalSelection => Some(Screen::SetupProfile),
            Screen::QuickLog | Screen::ManualLog => Some(Screen::Dashboard),
            Screen::Settings => Some(Screen::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// A transition that is not in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationError {
    pub from: Screen,
    pub to: Screen,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot navigate from {} to {}", self.from, self.to)
    }
}

impl std::error::Error for NavigationError {}

const MAX_HISTORY: usize = 16;

/// Finite-state router: every screen change goes through [`Router::dispatch`]
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    current: Screen,
    history: Vec<Screen>,
}

impl Router {
    pub fn new(initial: Screen) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn previous(&self) -> Option<Screen> {
        self.history.last().copied()
    }

    /// Move to `target` if the table allows it; a self-transition is a no-op
    pub fn dispatch(&mut self, target: Screen) -> Result<Screen, NavigationError> {
        if target == self.current {
            return Ok(self.current);
        }
        if !self.current.can_transition_to(target) {
            let err = NavigationError {
                from: self.current,
                to: target,
            };
            log::warn!("Rejected navigation: {}", err);
            return Err(err);
        }

        log::debug!("Navigate {} -> {}", self.current, target);
        self.history.push(self.current);
        if self.history.len() > MAX_HISTORY {
            self.history.remove(0);
        }
        self.current = target;
        Ok(target)
    }

    /// Target of the back arrow: the most recent allowed history entry, else a fixed parent
    pub fn back_target(&self) -> Option<Screen> {
        self.history
            .iter()
            .rev()
            .copied()
            .find(|s| *s != self.current && self.current.can_transition_to(*s))
            .or_else(|| self.current.default_back())
    }

    /// Follow the back arrow, unwinding history up to the target
    pub fn back(&mut self) -> Result<Screen, NavigationError> {
        let Some(target) = self.back_target() else {
            return Ok(self.current);
        };
        let from = self.current;
        self.dispatch(target)?;
        // drop the entries pushed by the forward step and this one
        if let Some(pos) = self.history.iter().rposition(|s| *s == target) {
            self.history.truncate(pos);
        }
        log::debug!("Back {} -> {}", from, target);
        Ok(target)
    }

    /// Jump to `screen` and forget the history (login, logout, forced sign-out)
    pub fn reset(&mut self, screen: Screen) {
        log::debug!("Router reset to {}", screen);
        self.current = screen;
        self.history.clear();
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Screen::Welcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen() {
        assert_eq!(Screen::initial(true), Screen::Dashboard);
        assert_eq!(Screen::initial(false), Screen::Welcome);
    }

    #[test]
    fn test_allowed_transition() {
        let mut router = Router::new(Screen::Welcome);
        assert_eq!(router.dispatch(Screen::Signup), Ok(Screen::Signup));
        assert_eq!(router.current(), Screen::Signup);
        assert_eq!(router.previous(), Some(Screen::Welcome));
    }

    #[test]
    fn test_rejected_transition_keeps_screen() {
        let mut router = Router::new(Screen::Welcome);
        let err = router.dispatch(Screen::Dashboard).unwrap_err();
        assert_eq!(
            err,
            NavigationError {
                from: Screen::Welcome,
                to: Screen::Dashboard
            }
        );
        assert_eq!(router.current(), Screen::Welcome);
        assert_eq!(err.to_string(), "cannot navigate from welcome to dashboard");
    }

    #[test]
    fn test_self_transition_is_noop() {
        let mut router = Router::new(Screen::Dashboard);
        assert_eq!(router.dispatch(Screen::Dashboard), Ok(Screen::Dashboard));
        assert_eq!(router.previous(), None);
    }

    #[test]
    fn test_welcome_not_reachable_from_dashboard() {
        let mut router = Router::new(Screen::Dashboard);
        assert!(router.dispatch(Screen::Welcome).is_err());
    }

    #[test]
    fn test_bottom_nav_targets_reachable_from_tabs() {
        for from in BOTTOM_NAV {
            for to in BOTTOM_NAV {
                assert!(from.can_transition_to(to), "{} -> {}", from, to);
            }
        }
        assert!(Screen::Dashboard.shows_bottom_nav());
        assert!(!Screen::Settings.shows_bottom_nav());
    }

    #[test]
    fn test_back_returns_to_settings_when_opened_from_settings() {
        let mut router = Router::new(Screen::Dashboard);
        router.dispatch(Screen::Settings).unwrap();
        router.dispatch(Screen::SetupProfile).unwrap();
        assert_eq!(router.back_target(), Some(Screen::Settings));
        assert_eq!(router.back(), Ok(Screen::Settings));
    }

    #[test]
    fn test_back_through_onboarding() {
        let mut router = Router::new(Screen::Welcome);
        router.dispatch(Screen::Signup).unwrap();
        router.dispatch(Screen::SetupProfile).unwrap();
        router.dispatch(Screen::GoalSelection).unwrap();

        assert_eq!(router.back(), Ok(Screen::SetupProfile));
        assert_eq!(router.back(), Ok(Screen::Signup));
        assert_eq!(router.back(), Ok(Screen::Welcome));
        assert_eq!(router.back(), Ok(Screen::Welcome));
    }

    #[test]
    fn test_back_falls_back_to_parent() {
        let mut router = Router::new(Screen::Dashboard);
        router.reset(Screen::Settings);
        assert_eq!(router.back_target(), Some(Screen::Profile));
    }

    #[test]
    fn test_reset_clears_history() {
        let mut router = Router::new(Screen::Dashboard);
        router.dispatch(Screen::Settings).unwrap();
        router.reset(Screen::Welcome);
        assert_eq!(router.current(), Screen::Welcome);
        assert_eq!(router.previous(), None);
    }
}
