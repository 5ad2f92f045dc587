//! Light/dark preference: resolution, persistence and application to the page root.
//!
//! The store never talks to the browser directly. Everything it touches goes
//! through a [`ThemeEnv`], so the same logic runs against `localStorage` in the
//! browser, a detached no-op environment on the server, and in-memory fakes in
//! tests.

use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<html>`; tailwind's `dark:` variant keys off it.
pub const DARK_CLASS: &str = "dark";

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Pick the effective theme from what is stored and what the environment reports.
    ///
    /// A non-empty stored value always wins, and only `"dark"` means dark. With
    /// nothing stored the ambient color-scheme signal decides; if that is
    /// unavailable too, the result is light.
    pub fn resolve(stored: Option<&str>, prefers_dark: Option<bool>) -> Self {
        match stored {
            Some(value) if !value.is_empty() => value.parse().unwrap_or_default(),
            _ if prefers_dark.unwrap_or(false) => Self::Dark,
            _ => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// The ambient state the theme store reads and writes.
///
/// Implementations swallow their own failures: a read that cannot be served
/// returns `None`, a write that cannot be performed is dropped.
pub trait ThemeEnv {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    /// `None` when the environment cannot answer the color-scheme query.
    fn prefers_dark(&self) -> Option<bool>;
    fn mark_dark(&mut self, dark: bool);
}

/// Environment with no storage, no color-scheme signal and no document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedEnv;

impl ThemeEnv for DetachedEnv {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&mut self, _key: &str, _value: &str) {}

    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn mark_dark(&mut self, _dark: bool) {}
}

/// `localStorage`, `matchMedia` and the class list of `<html>`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnv;

#[cfg(feature = "hydrate")]
impl BrowserEnv {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl ThemeEnv for BrowserEnv {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        web_sys::window()?
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }

    fn mark_dark(&mut self, dark: bool) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
    }
}

/// The environment the running build talks to.
#[cfg(feature = "hydrate")]
pub type PlatformEnv = BrowserEnv;
#[cfg(not(feature = "hydrate"))]
pub type PlatformEnv = DetachedEnv;

#[derive(Debug, Clone)]
pub struct ThemeStore<E> {
    env: E,
    key: &'static str,
    current: Theme,
}

impl<E: ThemeEnv> ThemeStore<E> {
    pub fn new(env: E, key: &'static str) -> Self {
        Self {
            env,
            key,
            current: Theme::default(),
        }
    }

    /// Compute the starting theme without touching storage or the page.
    pub fn initial_preference(&self) -> Theme {
        Theme::resolve(self.env.read(self.key).as_deref(), self.env.prefers_dark())
    }

    /// Resolve the starting theme, then apply and persist it.
    pub fn load(&mut self) -> Theme {
        let theme = self.initial_preference();
        self.set_preference(theme);
        theme
    }

    pub fn set_preference(&mut self, theme: Theme) {
        self.env.write(self.key, theme.as_str());
        self.env.mark_dark(theme.is_dark());
        self.current = theme;
    }

    pub fn toggle_preference(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set_preference(next);
        next
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn env(&self) -> &E {
        &self.env
    }
}

/// Inline head script that sets the dark class before the first paint.
///
/// Mirrors [`Theme::resolve`]; the wasm bundle takes over once it has loaded.
pub fn bootstrap_script(key: &str) -> String {
    format!(
        "(function(){{try{{var t=localStorage.getItem('{key}');\
         if(t==='{dark}'||(!t&&window.matchMedia('{query}').matches))\
         {{document.documentElement.classList.add('{class}');}}}}catch(e){{}}}})();",
        dark = Theme::Dark.as_str(),
        query = PREFERS_DARK_QUERY,
        class = DARK_CLASS,
    )
}
