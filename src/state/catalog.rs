use thiserror::Error;

/// Error returned for catalog lookups outside the valid page range
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested index is outside `1..=count`
    #[error("page index {index} is out of range (catalog holds {count} pages)")]
    OutOfRange { index: usize, count: usize },
}

/// A single magazine page
///
/// Pages are immutable once constructed; the catalog creates them at startup
/// and they live for the whole process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Unique, stable page id (1-based, doubles as the display position)
    pub id: usize,
    /// Asset reference of the full-size page image
    pub image_asset: String,
}

impl Page {
    fn new(id: usize, image_asset: &str) -> Self {
        Self {
            id,
            image_asset: image_asset.to_string(),
        }
    }

    /// Asset reference of the drawer thumbnail, derived from the image name
    pub fn thumbnail_asset(&self) -> String {
        format!("thumb-{}", self.image_asset)
    }
}

/// The ordered, immutable page catalog
///
/// Populated once at startup from the built-in page list. The order is the
/// display order for both the main view and the drawer thumbnails.
#[derive(Debug, Clone)]
pub struct PageCatalog {
    pages: Vec<Page>,
}

impl PageCatalog {
    /// The built-in magazine catalog
    pub fn builtin() -> Self {
        Self {
            pages: vec![
                Page::new(1, "magazine-front-cover"),
                Page::new(2, "magazine-back-cover"),
            ],
        }
    }

    /// Number of pages in the catalog
    pub fn count(&self) -> usize {
        self.pages.len()
    }

    /// Look up a page by 1-based index
    pub fn page_at(&self, index: usize) -> Result<&Page, CatalogError> {
        if index < 1 || index > self.pages.len() {
            return Err(CatalogError::OutOfRange {
                index,
                count: self.pages.len(),
            });
        }
        Ok(&self.pages[index - 1])
    }

    /// All pages in display order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_one_based() {
        let catalog = PageCatalog::builtin();

        assert!(catalog.page_at(0).is_err());
        assert!(catalog.page_at(catalog.count() + 1).is_err());
        assert!(catalog.page_at(1).is_ok());
        assert!(catalog.page_at(catalog.count()).is_ok());
    }

    #[test]
    fn test_out_of_range_error_reports_bounds() {
        let catalog = PageCatalog::builtin();

        let err = catalog.page_at(9).unwrap_err();
        assert_eq!(err, CatalogError::OutOfRange { index: 9, count: 2 });
    }

    #[test]
    fn test_thumbnail_reference_is_derived_from_image() {
        let catalog = PageCatalog::builtin();

        let front = catalog.page_at(1).unwrap();
        assert_eq!(front.image_asset, "magazine-front-cover");
        assert_eq!(front.thumbnail_asset(), "thumb-magazine-front-cover");
    }

    #[test]
    fn test_catalog_order_matches_page_ids() {
        let catalog = PageCatalog::builtin();

        for (position, page) in catalog.pages().iter().enumerate() {
            assert_eq!(page.id, position + 1);
        }
    }
}
