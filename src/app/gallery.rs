use leptos::prelude::*;

use crate::config::SiteConfig;

use super::section::Section;

/// Columns of the same photos scrolling upward on staggered loops.
#[component]
pub fn Work() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let columns = (0..config.gallery_columns)
        .map(move |col| {
            let photos = config
                .gallery
                .iter()
                .enumerate()
                .map(|(i, src)| {
                    view! {
                        <img
                            src=*src
                            alt=format!("Photo {}", i + 1)
                            class="object-cover w-full h-64 rounded-2xl shadow-sm mb-6"
                        />
                    }
                })
                .collect_view();
            view! {
                <div
                    class="flex flex-col items-center gap-4 animate-[scroll_15s_linear_infinite]"
                    style:animation-delay=config.column_delay(col)
                >
                    {photos}
                </div>
            }
        })
        .collect_view();

    view! {
        <Section id="work" title="My work" subtitle="Explore the stories">
            <div class="grid grid-cols-3 gap-4 overflow-hidden max-h-[32rem]">{columns}</div>
        </Section>
    }
}
