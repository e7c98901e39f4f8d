//! Column Schema
//!
//! The product table as an ordered list of plain column descriptors.

use std::cmp::Ordering;

use crate::models::Product;

/// Raw value read out of a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Int(u64),
    Text(String),
    Missing,
}

/// What a table cell displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    /// Square image, cropped to fit
    Thumbnail { src: String, size_px: u32 },
    /// Stand-in for a missing image
    Placeholder { size_px: u32 },
}

impl From<CellValue> for CellView {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Int(n) => CellView::Text(n.to_string()),
            CellValue::Text(text) => CellView::Text(text),
            CellValue::Missing => CellView::Text(String::new()),
        }
    }
}

pub type Accessor = fn(&Product) -> CellValue;
pub type Comparator = fn(&Product, &Product) -> Ordering;
pub type Renderer = fn(&Product, CellValue, u32) -> CellView;

/// One table column
#[derive(Clone, Copy)]
pub struct ColumnDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub value: Accessor,
    /// Present only on sortable columns
    pub comparator: Option<Comparator>,
    /// Defaults to displaying the raw value
    pub renderer: Option<Renderer>,
    /// Image edge length handed to the renderer
    pub thumbnail_px: u32,
}

impl ColumnDescriptor {
    pub fn is_sortable(&self) -> bool {
        self.comparator.is_some()
    }

    pub fn cell(&self, product: &Product) -> CellView {
        let value = (self.value)(product);
        match self.renderer {
            Some(render) => render(product, value, self.thumbnail_px),
            None => value.into(),
        }
    }
}

impl std::fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}

/// The six product columns, in display order
pub fn product_columns(thumbnail_px: u32) -> Vec<ColumnDescriptor> {
    let column = |key: &'static str, title: &'static str, value: Accessor| ColumnDescriptor {
        key,
        title,
        value,
        comparator: None,
        renderer: None,
        thumbnail_px,
    };

    vec![
        column("id", "ID", |p| CellValue::Int(p.id.into())),
        column("name", "Tên sản phẩm", |p| CellValue::Text(p.name.clone())),
        ColumnDescriptor {
            comparator: Some(compare_price),
            ..column("price", "Giá", |p| CellValue::Int(p.price))
        },
        column("description", "Mô tả", |p| CellValue::Text(p.description.clone())),
        ColumnDescriptor {
            renderer: Some(render_thumbnail),
            ..column("image", "Hình ảnh", |p| match &p.image {
                Some(url) if !url.trim().is_empty() => CellValue::Text(url.clone()),
                _ => CellValue::Missing,
            })
        },
        ColumnDescriptor {
            renderer: Some(render_price_words),
            ..column("priceText", "Giá bằng chữ", |p| CellValue::Int(p.price))
        },
    ]
}

fn compare_price(a: &Product, b: &Product) -> Ordering {
    a.price.cmp(&b.price)
}

fn render_price_words(product: &Product, _: CellValue, _: u32) -> CellView {
    CellView::Text(vnd_words::to_words(product.price))
}

fn render_thumbnail(_: &Product, value: CellValue, size_px: u32) -> CellView {
    match value {
        CellValue::Text(src) => CellView::Thumbnail { src, size_px },
        _ => CellView::Placeholder { size_px },
    }
}
