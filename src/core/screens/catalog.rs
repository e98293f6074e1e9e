//! Course catalog screen

use crate::core::catalog::{Catalog, CatalogError, CatalogSource, Selection};
use crate::core::models::{Category, CategorySelector, Course};
use crate::core::render::{CatalogView, ChipView, CourseCard};
use crate::info;

/// Catalog screen heading
pub const HEADING: &str = "Все курсы";

/// A category chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    /// Selector applied when the chip is tapped
    pub selector: CategorySelector,
    /// Whether the chip is the current selection
    pub active: bool,
}

/// The catalog screen: the full course list plus the selection that filters it
#[derive(Debug, Clone)]
pub struct CatalogScreen {
    catalog: Catalog,
    selection: Selection,
}

impl CatalogScreen {
    /// Screen over an already built catalog, with a fresh selection
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
        }
    }

    /// Build the catalog from `source` and open the screen
    ///
    /// # Errors
    /// Returns an error if the source fails or its records are invalid
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_source(source)?;
        info!(
            "Catalog screen opened with {} courses from {}",
            catalog.len(),
            source.describe()
        );
        Ok(Self::new(catalog))
    }

    /// Underlying catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable access to the selection
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Tap a category chip
    pub fn select_category(&mut self, selector: CategorySelector) {
        self.selection.set_category(selector);
    }

    /// Type into the search box
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.selection.set_query(query);
    }

    /// "All" chip, the fixed category chips, and a chip for any other
    /// category the catalog uses
    #[must_use]
    pub fn chips(&self) -> Vec<Chip> {
        let active = self.selection.category();
        let present = self.catalog.categories();
        let shown = Category::ALL
            .into_iter()
            .filter(|category| Category::CHIPS.contains(category) || present.contains(category));
        std::iter::once(CategorySelector::All)
            .chain(shown.map(CategorySelector::Only))
            .map(|selector| Chip {
                selector,
                active: selector == active,
            })
            .collect()
    }

    /// Courses shown for the current selection
    #[must_use]
    pub fn visible(&self) -> Vec<&Course> {
        self.selection.visible(&self.catalog)
    }

    /// Display model for the renderer
    #[must_use]
    pub fn view(&self) -> CatalogView {
        CatalogView {
            heading: HEADING.to_string(),
            query: self.selection.query().to_string(),
            chips: self
                .chips()
                .into_iter()
                .map(|chip| ChipView {
                    label: chip.selector.label().to_string(),
                    key: chip.selector.to_string(),
                    active: chip.active,
                })
                .collect(),
            cards: self.visible().into_iter().map(CourseCard::from).collect(),
            total: self.catalog.len(),
        }
    }
}
