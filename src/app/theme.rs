use leptos::prelude::*;

use crate::theme::{PlatformEnv, Theme, ThemeStore};

/// Reactive handle on the theme store, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    store: StoredValue<ThemeStore<PlatformEnv>>,
}

impl ThemeContext {
    /// Create the context, provide it, and schedule the initial load.
    ///
    /// The server always renders light. Effects only run in the browser, so
    /// the stored or ambient preference is resolved, applied and persisted there.
    pub fn provide(key: &'static str) -> Self {
        let ctx = Self {
            theme: RwSignal::new(Theme::default()),
            store: StoredValue::new(ThemeStore::new(PlatformEnv::default(), key)),
        };
        Effect::new(move |_| {
            ctx.store.update_value(|store| {
                store.load();
            });
            ctx.sync();
        });
        provide_context(ctx);
        ctx
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle_preference();
        });
        self.sync();
    }

    fn sync(&self) {
        let theme = self.store.with_value(|store| store.current());
        log::debug!("theme set to {theme}");
        self.theme.set(theme);
    }
}
