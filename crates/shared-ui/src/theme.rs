use dioxus::prelude::*;

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Key used for the cookie and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "الوضع الفاتح",
            ThemeMode::Dark => "الوضع الداكن",
        }
    }

    /// Parse a stored key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Shared theme state provided as context by the layout.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        self.mode.set(next);
        set_theme(next);
    }
}

/// Seed the document on startup: right-to-left Arabic layout plus the
/// persisted colour scheme. Render once in the top-level App.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var root = document.documentElement;
                root.setAttribute('dir', 'rtl');
                root.setAttribute('lang', 'ar');
                var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
                root.setAttribute('data-theme', match ? match[1] : 'light');
            })();
            "#,
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./theme.css") }
    }
}

/// Apply a colour scheme and remember it in a cookie.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn keys_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_light() {
        assert_eq!(ThemeMode::from_key("cyberpunk"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
