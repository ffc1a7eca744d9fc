//! Theme preference, persisted in localStorage and applied as a
//! `data-theme` attribute on `<body>`. Missing storage (private
//! browsing, sandboxed frames) degrades to the default silently.

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Saved preference, or the default when storage is unavailable or
/// holds something unrecognized.
pub fn load() -> Theme {
    storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok()?)
        .and_then(|name| Theme::from_name(&name))
        .unwrap_or_default()
}

fn store(theme: Theme) {
    if let Some(s) = storage() {
        let _ = s.set_item(STORAGE_KEY, theme.name());
    }
}

fn apply(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.set_attribute("data-theme", theme.name());
    }
}

/// Apply the saved theme at startup. Returns the active theme.
pub fn init() -> Theme {
    let theme = load();
    apply(theme);
    theme
}

/// Flip, persist and apply. Returns the new theme.
pub fn toggle() -> Theme {
    let theme = load().toggled();
    store(theme);
    apply(theme);
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::from_name(Theme::Light.name()), Some(Theme::Light));
    }

    #[test]
    fn unknown_saved_value_falls_back_to_default() {
        assert_eq!(
            Theme::from_name("mango").unwrap_or_default(),
            Theme::Dark
        );
    }
}
