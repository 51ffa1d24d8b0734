//! Product and service content shown on the page.

pub mod static_catalog;

/// Image shown when a product ships without gallery images.
pub const PLACEHOLDER_IMAGE: &str = "public/placeholder.jpg";

/// One portfolio item. Borrowed from the catalog and immutable for the session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Product<'a> {
    pub id: u32,
    pub name: &'a str,
    /// Category label, e.g. `متجر إلكتروني`.
    pub category: &'a str,
    pub description: &'a str,
    pub goal: &'a str,
    pub technologies: &'a [&'a str],
    pub features: &'a [&'a str],
    pub images: &'a [&'a str],
    pub live_demo: &'a str,
}

impl<'a> Product<'a> {
    pub fn cover_image(&self) -> Option<&'a str> {
        self.images.first().copied()
    }

    /// Number of gallery slots, counting the placeholder for image-less products.
    pub fn gallery_len(&self) -> usize {
        self.images.len().max(1)
    }

    /// Gallery image at `index`, falling back to the placeholder.
    pub fn gallery_image(&self, index: usize) -> &'a str {
        self.images.get(index).copied().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Entry of the static services section.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceOffer<'a> {
    pub icon: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// Read-only list of products supplied to the page.
pub trait ProductCatalog {
    fn product_count(&self) -> usize;
    fn product_at(&self, index: usize) -> Option<Product<'_>>;

    fn service_count(&self) -> usize {
        0
    }

    fn service_at(&self, _index: usize) -> Option<ServiceOffer<'_>> {
        None
    }

    fn is_empty(&self) -> bool {
        self.product_count() == 0
    }
}
