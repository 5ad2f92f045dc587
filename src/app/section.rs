use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealOnce, REVEAL_THRESHOLD};

#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let subtitle = subtitle.filter(|s| !s.is_empty());

    view! {
        <section id=id class="scroll-mt-24 py-16 md:py-24 font-sans">
            <div class="mx-auto max-w-6xl px-4">
                <Reveal>
                    <h2 class="text-3xl md:text-4xl font-serif font-semibold tracking-tight text-gray-900 dark:text-white transition-colors">
                        {title}
                    </h2>
                </Reveal>
                {subtitle
                    .map(|s| {
                        view! {
                            <Reveal rise_px=8 delay_ms=50>
                                <p class="mt-2 text-gray-600 dark:text-gray-400 italic transition-colors">
                                    {s}
                                </p>
                            </Reveal>
                        }
                    })}
                <div class="mt-8">{children()}</div>
            </div>
        </section>
    }
}

/// Fades and lifts its children in the first time enough of them scrolls into view.
///
/// The observer is stopped as soon as the reveal fires; scrolling away and
/// back does not replay it.
#[component]
pub fn Reveal(
    #[prop(default = 12)] rise_px: u32,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let shown = RwSignal::new(false);

    let mut latch = RevealOnce::new(REVEAL_THRESHOLD);
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries
                .iter()
                .any(|entry| latch.observe(entry.is_intersecting(), entry.intersection_ratio()))
            {
                shown.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::watch(
        move || shown.get(),
        move |is_shown, _, _| {
            if *is_shown {
                stop();
            }
        },
        false,
    );

    view! {
        <div
            node_ref=target
            class="transition duration-500 ease-out"
            style:opacity=move || if shown.get() { "1" } else { "0" }
            style:transform=move || {
                if shown.get() {
                    "translateY(0)".to_string()
                } else {
                    format!("translateY({rise_px}px)")
                }
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </div>
    }
}
