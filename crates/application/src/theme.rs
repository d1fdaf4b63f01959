//! Day/night palette selection.

use catalog_core::{Theme, ThemeTokens};

/// Colour-scheme hint from the environment the program runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemPreference {
    Dark,
    Light,
    #[default]
    NoPreference,
}

impl SystemPreference {
    /// `scheme` is an explicit `dark`/`light` override; `colorfgbg` is the
    /// `fg;bg` pair many terminals export, where background indices 0-6 and 8
    /// are dark.
    pub fn detect(scheme: Option<&str>, colorfgbg: Option<&str>) -> Self {
        if let Some(scheme) = scheme {
            match scheme.trim().to_ascii_lowercase().as_str() {
                "dark" | "night" => return Self::Dark,
                "light" | "day" => return Self::Light,
                _ => {}
            }
        }

        let Some(background) = colorfgbg
            .and_then(|value| value.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok())
        else {
            return Self::NoPreference;
        };

        match background {
            0..=6 | 8 => Self::Dark,
            _ => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedTheme {
    pub theme: Theme,
    pub tokens: ThemeTokens,
}

impl AppliedTheme {
    /// Value the settings selector shows.
    pub fn selector_value(&self) -> &'static str {
        self.theme.as_str()
    }
}

pub fn apply_preference(stored: Option<Theme>, system: SystemPreference) -> AppliedTheme {
    let theme = stored.unwrap_or(match system {
        SystemPreference::Dark => Theme::Night,
        SystemPreference::Light | SystemPreference::NoPreference => Theme::Day,
    });
    apply_selection(theme)
}

pub fn apply_selection(theme: Theme) -> AppliedTheme {
    AppliedTheme {
        theme,
        tokens: ThemeTokens::for_theme(theme),
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::Rgb;

    use super::*;

    #[test]
    fn detects_explicit_scheme_first() {
        assert_eq!(
            SystemPreference::detect(Some("dark"), Some("0;15")),
            SystemPreference::Dark
        );
        assert_eq!(
            SystemPreference::detect(Some("Light"), Some("15;0")),
            SystemPreference::Light
        );
    }

    #[test]
    fn detects_from_colorfgbg() {
        assert_eq!(
            SystemPreference::detect(None, Some("15;0")),
            SystemPreference::Dark
        );
        assert_eq!(
            SystemPreference::detect(None, Some("15;default;8")),
            SystemPreference::Dark
        );
        assert_eq!(
            SystemPreference::detect(None, Some("0;15")),
            SystemPreference::Light
        );
        assert_eq!(
            SystemPreference::detect(Some("auto"), Some("garbage")),
            SystemPreference::NoPreference
        );
        assert_eq!(
            SystemPreference::detect(None, None),
            SystemPreference::NoPreference
        );
    }

    #[test]
    fn system_dark_selects_night() {
        let applied = apply_preference(None, SystemPreference::Dark);
        assert_eq!(applied.selector_value(), "night");
        assert_eq!(applied.tokens.dark, Rgb(255, 255, 255));
        assert_eq!(applied.tokens.light, Rgb(10, 10, 20));

        let applied = apply_preference(None, SystemPreference::NoPreference);
        assert_eq!(applied.selector_value(), "day");
        assert_eq!(applied.tokens.dark, Rgb(10, 10, 20));
    }

    #[test]
    fn stored_preference_wins_over_system() {
        let applied = apply_preference(Some(Theme::Day), SystemPreference::Dark);
        assert_eq!(applied.theme, Theme::Day);
    }
}
