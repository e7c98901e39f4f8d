//! Product List Component
//!
//! Heading, refresh button, and either the product table or an error notice.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ErrorAlert, ProductTable};
use crate::config::AppConfig;
use crate::query::{use_product_loader, ProductLoader, QueryState, QueryStateStoreFields, QueryStore};

pub const HEADING: &str = "Danh sách sản phẩm";
pub const REFRESH_LABEL: &str = "Làm mới dữ liệu";

/// Title and body of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

/// Shown whenever the latest fetch failed, whatever the cause
pub const FETCH_FAILED: Notice = Notice {
    title: "Lỗi",
    description: "Không thể tải dữ liệu. Vui lòng thử lại!",
};

/// What the list shows for a given query state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLayout {
    pub show_table: bool,
    pub notice: Option<Notice>,
    pub refresh_disabled: bool,
    pub loading: bool,
}

impl ListLayout {
    pub fn new(is_loading: bool, is_error: bool) -> Self {
        Self {
            show_table: !is_error,
            notice: is_error.then_some(FETCH_FAILED),
            refresh_disabled: is_loading,
            loading: is_loading,
        }
    }

    pub fn from_state(state: &QueryState) -> Self {
        Self::new(state.is_loading, state.is_error)
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (page_size, thumbnail_px) = (config.page_size, config.thumbnail_px);

    let loader = StoredValue::new(use_product_loader());
    let state: QueryStore = Store::new(QueryState::seeded(loader.with_value(ProductLoader::cached)));

    let run = move |force: bool| {
        let ticket = state.write().start_fetch();
        let loader = loader.get_value();
        spawn_local(async move {
            let outcome = if force { loader.refetch().await } else { loader.load().await };
            match state.try_update(|s| s.finish_fetch(ticket, outcome)) {
                Some(true) => {}
                Some(false) => log::debug!("[ProductList] Dropped superseded response #{}", ticket),
                None => log::debug!("[ProductList] Unmounted before response #{}", ticket),
            }
        });
    };

    // Load on mount
    Effect::new(move |_| run(false));

    let layout = Memo::new(move |_| ListLayout::new(state.is_loading().get(), state.is_error().get()));
    let products = Signal::derive(move || state.data().get().unwrap_or_default());

    view! {
        <div class="product-list">
            <h2>{HEADING}</h2>
            <button
                class="btn btn-primary refresh-btn"
                disabled=move || layout.get().refresh_disabled
                on:click=move |_| run(true)
            >
                {REFRESH_LABEL}
            </button>
            <Show
                when=move || layout.get().show_table
                fallback=move || layout.get().notice.map(|notice| view! {
                    <ErrorAlert title=notice.title description=notice.description />
                })
            >
                <ProductTable
                    products=products
                    loading=Signal::derive(move || layout.get().loading)
                    page_size=page_size
                    thumbnail_px=thumbnail_px
                />
            </Show>
        </div>
    }
}
