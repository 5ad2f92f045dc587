use leptos::prelude::*;

use crate::config::SiteConfig;

use super::ThemeContext;

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <header class="sticky top-0 z-40 border-b border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-950/80 backdrop-blur transition-colors duration-300">
            <div class="mx-auto max-w-6xl px-4 h-20 flex items-center justify-between">
                <a href="#home" class="flex items-center gap-3 font-serif font-semibold tracking-tight">
                    <span class="text-3xl md:text-4xl font-bold text-gray-800 dark:text-white leading-tight transition-colors">
                        {config.brand}
                    </span>
                </a>
                <div class="flex items-center gap-6">
                    <nav class="hidden md:flex items-center gap-6">
                        <NavLink href="#about">"About"</NavLink>
                        <NavLink href="#work">"My work"</NavLink>
                        <NavLink href="#contact">"Contact"</NavLink>
                    </nav>
                    <ThemeToggle />
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn NavLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            class="text-sm md:text-base text-gray-700 dark:text-gray-300 hover:text-black dark:hover:text-white transition-colors font-sans tracking-wide"
        >
            {children()}
        </a>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            type="button"
            on:click=move |_| theme.toggle()
            class="p-2 rounded-full hover:bg-gray-100 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300 transition-colors"
            aria-label="Toggle theme"
        >
            <span class="block w-5 h-5 leading-5 text-center">
                {move || if theme.theme().is_dark() { "☀" } else { "☾" }}
            </span>
        </button>
    }
}
