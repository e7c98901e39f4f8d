//! Product Table Component
//!
//! Sortable, paginated table over the fetched products. All ordering and
//! slicing happens in `crate::table`; this only draws the current page.

use leptos::prelude::*;

use crate::columns::{product_columns, CellView, ColumnDescriptor};
use crate::components::Pagination;
use crate::models::Product;
use crate::table::{build_view, next_sort, Row, SortOrder, SortState};

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] loading: Signal<bool>,
    page_size: usize,
    thumbnail_px: u32,
) -> impl IntoView {
    let columns = StoredValue::new(product_columns(thumbnail_px));
    let (sort, set_sort) = signal(None::<SortState>);
    let (page, set_page) = signal(1usize);

    let table = Memo::new(move |_| {
        let (sort, page) = (sort.get(), page.get());
        products.with(|products| {
            columns.with_value(|columns| build_view(products, columns, sort, page, page_size))
        })
    });

    // Changing the sort goes back to the first page
    let on_header_click = move |key: &'static str| {
        set_sort.update(|s| *s = next_sort(*s, key));
        set_page.set(1);
    };

    let column_count = columns.with_value(|columns| columns.len()).to_string();

    view! {
        <div class="table-wrapper" class:loading=move || loading.get()>
            <Show when=move || loading.get()>
                <div class="table-spinner">"Đang tải..."</div>
            </Show>
            <table class="product-table">
                <thead>
                    <tr>
                        {columns.with_value(|columns| {
                            columns
                                .iter()
                                .map(|column| header_cell(column, sort, on_header_click))
                                .collect_view()
                        })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = table.get().rows;
                        if rows.is_empty() {
                            view! {
                                <tr class="table-empty">
                                    <td colspan=column_count.clone()>"Không có dữ liệu"</td>
                                </tr>
                            }.into_any()
                        } else {
                            rows.into_iter().map(render_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <Pagination
                current=Signal::derive(move || table.get().page)
                page_count=Signal::derive(move || table.get().page_count)
                on_change=move |p: usize| set_page.set(p)
            />
        </div>
    }
}

fn header_cell(
    column: &ColumnDescriptor,
    sort: ReadSignal<Option<SortState>>,
    on_click: impl Fn(&'static str) + Copy + 'static,
) -> AnyView {
    let key = column.key;
    let title = column.title;

    if !column.is_sortable() {
        return view! { <th>{title}</th> }.into_any();
    }

    let indicator = move || match sort.get() {
        Some(SortState { column, order }) if column == key => match order {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        },
        _ => "↕",
    };

    view! {
        <th class="sortable" on:click=move |_| on_click(key)>
            {title}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
    .into_any()
}

fn render_row(row: Row) -> impl IntoView {
    view! {
        <tr data-row-key=row.key.to_string()>
            {row.cells.into_iter().map(render_cell).collect_view()}
        </tr>
    }
}

fn render_cell(cell: CellView) -> AnyView {
    match cell {
        CellView::Text(text) => view! { <td>{text}</td> }.into_any(),
        CellView::Thumbnail { src, size_px } => view! {
            <td>
                <img
                    src=src
                    alt="product"
                    style=format!("width: {0}px; height: {0}px; object-fit: cover;", size_px)
                />
            </td>
        }
        .into_any(),
        CellView::Placeholder { size_px } => view! {
            <td>
                <div
                    class="image-placeholder"
                    style=format!("width: {0}px; height: {0}px;", size_px)
                >
                    "·"
                </div>
            </td>
        }
        .into_any(),
    }
}
