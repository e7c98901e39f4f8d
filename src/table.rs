//! Table Model
//!
//! Client-side sorting and pagination over the fetched products.
//! Pure functions; the `ProductTable` component only renders the result.

use crate::columns::{CellView, ColumnDescriptor};
use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Active sort: which column, which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: &'static str,
    pub order: SortOrder,
}

/// Header click: none -> ascending -> descending -> none
///
/// Clicking a different column starts over at ascending.
pub fn next_sort(current: Option<SortState>, column: &'static str) -> Option<SortState> {
    let order = match current {
        Some(s) if s.column == column => match s.order {
            SortOrder::Ascending => Some(SortOrder::Descending),
            SortOrder::Descending => None,
        },
        _ => Some(SortOrder::Ascending),
    };
    order.map(|order| SortState { column, order })
}

/// One rendered row, keyed by product id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: u32,
    pub cells: Vec<CellView>,
}

/// Everything the table needs to draw one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<Row>,
    /// 1-based, always within `1..=page_count`
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Number of pages for `total` rows; an empty table still has one page
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into range
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Sort, slice and project products into the rows of one page
pub fn build_view(
    products: &[Product],
    columns: &[ColumnDescriptor],
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
) -> TableView {
    let page_size = page_size.max(1);
    let mut ordered: Vec<&Product> = products.iter().collect();

    let comparator = sort.and_then(|s| {
        columns
            .iter()
            .find(|c| c.key == s.column)
            .and_then(|c| c.comparator)
            .map(|cmp| (cmp, s.order))
    });
    if let Some((cmp, order)) = comparator {
        // Stable: equal keys keep their fetched order
        ordered.sort_by(|a, b| match order {
            SortOrder::Ascending => cmp(a, b),
            SortOrder::Descending => cmp(b, a),
        });
    }

    let total = ordered.len();
    let page = clamp_page(page, total, page_size);
    let rows = ordered
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .map(|product| Row {
            key: product.id,
            cells: columns.iter().map(|c| c.cell(product)).collect(),
        })
        .collect();

    TableView {
        rows,
        page,
        page_count: page_count(total, page_size),
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::product_columns;
    use crate::query::decode_products;

    fn make_product(id: u32, price: u64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            price,
            description: String::new(),
            image: None,
        }
    }

    fn keys(view: &TableView) -> Vec<u32> {
        view.rows.iter().map(|r| r.key).collect()
    }

    #[test]
    fn test_sort_cycle() {
        let asc = next_sort(None, "price");
        assert_eq!(asc, Some(SortState { column: "price", order: SortOrder::Ascending }));
        let desc = next_sort(asc, "price");
        assert_eq!(desc.map(|s| s.order), Some(SortOrder::Descending));
        assert_eq!(next_sort(desc, "price"), None);
        // Switching column restarts at ascending
        assert_eq!(next_sort(desc, "id").map(|s| s.order), Some(SortOrder::Ascending));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 5), 1);
        assert_eq!(page_count(5, 5), 1);
        assert_eq!(page_count(6, 5), 2);
        assert_eq!(page_count(11, 5), 3);
        assert_eq!(clamp_page(0, 11, 5), 1);
        assert_eq!(clamp_page(9, 11, 5), 3);
    }

    #[test]
    fn test_pagination_slices_pages() {
        let products: Vec<_> = (1..=12).map(|id| make_product(id, 1000)).collect();
        let columns = product_columns(80);

        let first = build_view(&products, &columns, None, 1, 5);
        assert_eq!(keys(&first), [1, 2, 3, 4, 5]);
        assert_eq!(first.page_count, 3);
        assert_eq!(first.total, 12);

        let last = build_view(&products, &columns, None, 3, 5);
        assert_eq!(keys(&last), [11, 12]);

        // Data shrank under the current page
        let clamped = build_view(&products[..4], &columns, None, 3, 5);
        assert_eq!(clamped.page, 1);
        assert_eq!(keys(&clamped), [1, 2, 3, 4]);
    }

    #[test]
    fn test_price_sort_is_numeric_and_stable() {
        let products = vec![
            make_product(1, 20_000),
            make_product(2, 3_000),
            make_product(3, 100_000),
            make_product(4, 3_000),
        ];
        let columns = product_columns(80);

        let asc = Some(SortState { column: "price", order: SortOrder::Ascending });
        assert_eq!(keys(&build_view(&products, &columns, asc, 1, 5)), [2, 4, 1, 3]);

        let desc = Some(SortState { column: "price", order: SortOrder::Descending });
        assert_eq!(keys(&build_view(&products, &columns, desc, 1, 5)), [3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_on_unsortable_column_keeps_order() {
        let products = vec![make_product(3, 1), make_product(1, 2), make_product(2, 3)];
        let sort = Some(SortState { column: "name", order: SortOrder::Descending });
        let view = build_view(&products, &product_columns(80), sort, 1, 5);
        assert_eq!(keys(&view), [3, 1, 2]);
    }

    #[test]
    fn test_fetched_row_reads_price_in_words() {
        let products =
            decode_products(r#"[{"id":1,"name":"A","price":1000,"description":"d","image":"u"}]"#)
                .unwrap();
        let view = build_view(&products, &product_columns(80), None, 1, 5);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].key, 1);
        assert_eq!(view.rows[0].cells[5], CellView::Text("Một nghìn đồng".to_string()));
    }
}
