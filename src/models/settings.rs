use serde::{Deserialize, Serialize};
use std::fmt;

/// Time of day for a meal reminder (HH:MM)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReminderTime {
    pub hour: u8,
    pub minute: u8,
}

impl ReminderTime {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Parses `HH:MM` (as produced by a time input); seconds are ignored
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split(':');
        let hour: u8 = parts.next()?.parse().ok()?;
        let minute: u8 = parts.next()?.parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }
}

impl fmt::Display for ReminderTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for ReminderTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid time: {}", value))
    }
}

impl From<ReminderTime> for String {
    fn from(value: ReminderTime) -> Self {
        value.to_string()
    }
}

/// Local preferences from the settings screen; never sent to the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub reminders_enabled: bool,
    pub breakfast_reminder: ReminderTime,
    pub lunch_reminder: ReminderTime,
    pub dinner_reminder: ReminderTime,
    /// Show the advisory banner on the dashboard
    pub calorie_warning: bool,
    /// Upload the photo as taken instead of the downscaled copy
    pub save_original_images: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reminders_enabled: false,
            breakfast_reminder: ReminderTime::new(8, 0),
            lunch_reminder: ReminderTime::new(12, 0),
            dinner_reminder: ReminderTime::new(19, 0),
            calorie_warning: true,
            save_original_images: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.breakfast_reminder.to_string(), "08:00");
        assert_eq!(settings.lunch_reminder.to_string(), "12:00");
        assert_eq!(settings.dinner_reminder.to_string(), "19:00");
        assert!(settings.calorie_warning);
        assert!(settings.save_original_images);
    }

    #[test]
    fn test_reminder_time_parse() {
        assert_eq!(ReminderTime::parse("07:30"), Some(ReminderTime::new(7, 30)));
        assert_eq!(ReminderTime::parse("07:30:15"), Some(ReminderTime::new(7, 30)));
        assert_eq!(ReminderTime::parse("24:00"), None);
        assert_eq!(ReminderTime::parse("noon"), None);
    }

    #[test]
    fn test_toml_uses_hh_mm_strings() {
        let raw = toml::to_string(&AppSettings::default()).unwrap();
        assert!(raw.contains("breakfast_reminder = \"08:00\""));

        let parsed: AppSettings = toml::from_str("calorie_warning = false\n").unwrap();
        assert!(!parsed.calorie_warning);
        assert_eq!(parsed.dinner_reminder, ReminderTime::new(19, 0));
    }
}
