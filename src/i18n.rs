use dioxus_i18n::prelude::*;

/// Initialize i18n configuration with English as default language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US")).with_locale(Locale::new_static(
        unic_langid::langid!("en-US"),
        include_str!("../locales/en-US.ftl"),
    ))
}

#[cfg(test)]
mod tests {
    const EN_US: &str = include_str!("../locales/en-US.ftl");

    fn has_message(id: &str) -> bool {
        EN_US
            .lines()
            .any(|line| line.split_once(" = ").is_some_and(|(key, _)| key == id))
    }

    #[test]
    fn test_nutrient_labels_are_translated() {
        for id in [
            "field-calories",
            "field-protein",
            "field-carbs",
            "field-fat",
            "field-protein-grams",
            "field-carbs-grams",
            "field-fat-grams",
            "macro-line",
        ] {
            assert!(has_message(id), "missing message {}", id);
        }
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut ids: Vec<&str> = EN_US
            .lines()
            .filter_map(|line| line.split_once(" = ").map(|(key, _)| key))
            .filter(|key| !key.starts_with('#'))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
