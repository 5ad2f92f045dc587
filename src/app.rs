mod contact;
mod footer;
mod gallery;
mod header;
mod homepage;
mod section;
mod theme;

pub use theme::ThemeContext;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{config::SiteConfig, theme::bootstrap_script};

use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = SiteConfig::default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                // applies the stored theme before the wasm bundle loads
                <script inner_html=bootstrap_script(config.theme_key)></script>
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/aaryaview.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root composition: owns the site config and theme, lays out the page.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    provide_context(config);
    ThemeContext::provide(config.theme_key);

    view! {
        <Title formatter=move |title| format!("{} - {title}", config.brand) />

        <Router>
            <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100 font-sans transition-colors duration-300">
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
