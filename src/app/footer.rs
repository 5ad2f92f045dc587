use chrono::Datelike;
use leptos::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="border-t border-gray-200 dark:border-gray-800 py-6 text-center text-sm text-gray-500 dark:text-gray-400 font-sans transition-colors">
            {format!("© {year} {}. All rights reserved.", config.copyright_holder)}
        </footer>
    }
}
