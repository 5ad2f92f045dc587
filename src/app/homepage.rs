use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;

use super::{contact::Contact, gallery::Work, section::Section};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Work />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    view! {
        <section id="home" class="relative overflow-hidden">
            <div class="absolute inset-0 -z-10 opacity-50 [mask-image:radial-gradient(60%_60%_at_50%_20%,black,transparent)]">
                <div class="absolute -top-10 -left-10 h-64 w-64 rounded-full bg-gray-100 dark:bg-gray-800 transition-colors" />
                <div class="absolute top-20 right-0 h-80 w-80 rounded-full bg-gray-50 dark:bg-gray-900 transition-colors" />
            </div>
            <div class="mx-auto max-w-6xl px-4 py-20 md:py-28 grid md:grid-cols-2 gap-8">
                <div class=move || {
                    if mounted.get() {
                        "transition duration-[600ms] ease-out opacity-100 translate-y-0"
                    } else {
                        "transition duration-[600ms] ease-out opacity-0 translate-y-3"
                    }
                }>
                    <h1 class="text-4xl md:text-6xl font-serif font-semibold leading-tight tracking-tight text-gray-900 dark:text-white transition-colors">
                        "Crafting stories through light."
                    </h1>
                    <p class="mt-4 text-lg text-gray-600 dark:text-gray-300 font-sans transition-colors">
                        "I’m " <strong class="text-gray-900 dark:text-white">{config.owner}</strong>
                        ", a portrait and lifestyle photographer capturing honest moments for brands and people."
                    </p>
                    <div class="mt-6 flex items-center gap-3">
                        <a
                            class="rounded-full px-5 py-2 bg-black dark:bg-white text-white dark:text-black text-sm font-sans hover:opacity-90 transition-all"
                            href="#work"
                        >
                            "View my work"
                        </a>
                        <a
                            href="#contact"
                            class="px-5 py-2 rounded-full border border-gray-300 dark:border-gray-700 hover:border-gray-800 dark:hover:border-gray-200 text-sm font-sans text-gray-700 dark:text-gray-300 transition-colors"
                        >
                            "Get in touch"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <Section id="about" title="About me">
            <p class="text-gray-700 dark:text-gray-300 leading-relaxed max-w-3xl font-sans transition-colors">
                "I specialize in portrait, lifestyle, and editorial photography, with a deep passion for capturing the authentic essence of who people truly are through honest and intentional imagery. "
                "My approach is rooted in simplicity and authenticity: real people, real light, real moments. The best photographs happen when subjects feel comfortable being themselves and genuine emotions are allowed to unfold organically. "
                "Over the last few years, I've had the privilege of working with emerging brands, creative individuals, and passionate storytellers to craft visuals that feel timeless, intentional, and deeply personal to their unique narrative. "
                "Every project is an opportunity to tell a story, whether it's a personal portrait session celebrating individuality, a lifestyle shoot capturing everyday beauty, or an editorial piece pushing creative boundaries. "
                "My process is collaborative and thoughtful, taking time to understand your vision and brand, and creating imagery that resonates long after the shoot."
            </p>
        </Section>
    }
}
