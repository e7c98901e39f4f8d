//! Pagination Component
//!
//! Previous / numbered / next page buttons under the table.

use leptos::prelude::*;

/// Page switcher
///
/// # Arguments
/// * `current` - 1-based current page
/// * `page_count` - Total pages (at least 1)
/// * `on_change` - Called with the requested page, only when it differs from `current`
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    #[prop(into)] on_change: Callback<usize>,
) -> impl IntoView {
    let go = move |page: usize| {
        if (1..=page_count.get()).contains(&page) && page != current.get() {
            on_change.run(page);
        }
    };

    view! {
        <ul class="pagination">
            <li>
                <button
                    class="page-prev"
                    disabled=move || current.get() <= 1
                    on:click=move |_| go(current.get().saturating_sub(1))
                >
                    "‹"
                </button>
            </li>
            {move || (1..=page_count.get()).map(|page| {
                let item_class = move || {
                    if current.get() == page { "page-item active" } else { "page-item" }
                };
                view! {
                    <li>
                        <button class=item_class on:click=move |_| go(page)>
                            {page}
                        </button>
                    </li>
                }
            }).collect_view()}
            <li>
                <button
                    class="page-next"
                    disabled=move || current.get() >= page_count.get()
                    on:click=move |_| go(current.get() + 1)
                >
                    "›"
                </button>
            </li>
        </ul>
    }
}
