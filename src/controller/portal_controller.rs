//! Portal controller implementation
//!
//! Owns the view state (search query, active category, favorites, theme) and turns
//! it into a [`PortalView`] snapshot for the GUI after every change.

use crate::catalog::{AppRecord, Catalog, Category, CategoryFilter};
use crate::config::PortalConfig;
use crate::error::{Result, get_user_friendly_error};
use crate::filter;
use crate::storage::{
    FavoriteSet, FavoritesStore, JsonFileStore, MemoryStore, SharedStore, ThemeMode, ThemeStore,
};
use crate::utils::startup_profiler::{self, StartupPhase};
use crate::utils::{LinkOpener, SystemThemeProbe};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// One card as rendered by the GUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Category of the record
    pub category: Category,
    /// One-line summary
    pub description: String,
    /// Link opened on activation
    pub url: String,
    /// Short glyph
    pub icon: String,
    /// Whether the record is a favorite
    pub is_favorite: bool,
}

impl CardView {
    fn new(record: &AppRecord, is_favorite: bool) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            category: record.category,
            description: record.description.clone(),
            url: record.url.clone(),
            icon: record.icon.clone(),
            is_favorite,
        }
    }
}

/// Snapshot of everything the window shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalView {
    /// Filtered records in catalog order
    pub cards: Vec<CardView>,
    /// Favorite records for the Quick Access row; empty when the row is hidden
    pub quick_access: Vec<CardView>,
    /// Title above the results grid
    pub heading: String,
    /// Number of filtered records
    pub result_count: usize,
    /// Whether the empty-results view replaces the grid
    pub show_empty_state: bool,
    /// Whether the dark palette is active
    pub dark_mode: bool,
    /// Current search text
    pub search_query: String,
    /// Current category selection
    pub active_category: CategoryFilter,
    /// Last failure worth telling the user about, or empty
    pub status_message: String,
}

/// Central state holder for the portal window
pub struct PortalController {
    catalog: Catalog,
    favorites: FavoritesStore,
    theme: ThemeStore,
    opener: Box<dyn LinkOpener>,
    open_links_on_click: bool,
    search_query: String,
    active_category: CategoryFilter,
    status_message: String,
}

impl PortalController {
    /// Create a controller with an empty query and the `ALL` category selected
    pub fn new(
        catalog: Catalog,
        favorites: FavoritesStore,
        theme: ThemeStore,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            theme,
            opener,
            open_links_on_click: true,
            search_query: String::new(),
            active_category: CategoryFilter::All,
            status_message: String::new(),
        }
    }

    /// Load the catalog and stores for `config` from `data_dir`
    ///
    /// An unreadable storage file falls back to in-memory storage so the portal
    /// still opens; changes are then lost at exit.
    pub fn open(
        config: &PortalConfig,
        data_dir: &Path,
        probe: &dyn SystemThemeProbe,
        opener: Box<dyn LinkOpener>,
    ) -> Result<Self> {
        let profiler = startup_profiler::get_profiler();

        let catalog = Catalog::load(config.catalog_path.as_deref())?;
        profiler.record_phase(StartupPhase::CatalogLoad);

        let storage: SharedStore = match JsonFileStore::open_in(data_dir) {
            Ok(store) => store.shared(),
            Err(e) => {
                error!("Failed to open storage, changes will not persist: {}", e);
                MemoryStore::new().shared()
            }
        };
        let favorites = FavoritesStore::load(Arc::clone(&storage));
        let theme = ThemeStore::load(storage, probe);
        profiler.record_phase(StartupPhase::StorageLoad);

        Ok(Self::new(catalog, favorites, theme, opener)
            .with_link_opening(config.preferences.open_links_on_click))
    }

    /// Enable or disable opening links when a card is activated
    #[must_use]
    pub fn with_link_opening(mut self, enabled: bool) -> Self {
        self.open_links_on_click = enabled;
        self
    }

    /// Replace the search text; the category is untouched
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.status_message.clear();
        debug!("Search query set to {:?}", self.search_query);
    }

    /// Replace the category selection; the search text is untouched
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.active_category = category;
        self.status_message.clear();
        debug!("Category set to {}", category);
    }

    /// Clear the search text and select `ALL`
    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.active_category = CategoryFilter::All;
        self.status_message.clear();
        debug!("Filters reset");
    }

    /// Toggle a favorite; returns whether `id` is now a favorite
    ///
    /// A failed write keeps the toggle and sets the status message.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.status_message.clear();
        if !self.catalog.contains(id) {
            warn!("Toggling favorite for unknown application id {}", id);
        }

        match self.favorites.toggle(id) {
            Ok(now_favorite) => now_favorite,
            Err(e) => {
                error!("Failed to save favorites: {}", e);
                self.status_message = get_user_friendly_error(&e);
                self.favorites.is_favorite(id)
            }
        }
    }

    /// Flip the theme; returns the new mode
    ///
    /// A failed write keeps the new mode and sets the status message.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.status_message.clear();
        if let Err(e) = self.theme.toggle() {
            error!("Failed to save theme: {}", e);
            self.status_message = get_user_friendly_error(&e);
        }
        self.theme.mode()
    }

    /// Open the link of the application `id`
    ///
    /// Unknown ids, records without a link, and disabled link opening are no-ops.
    pub fn open_app(&mut self, id: &str) -> Result<()> {
        self.status_message.clear();
        if !self.open_links_on_click {
            debug!("Link opening disabled, ignoring {}", id);
            return Ok(());
        }
        let Some(record) = self.catalog.get(id) else {
            warn!("Open requested for unknown application id {}", id);
            return Ok(());
        };
        if record.url.is_empty() {
            debug!("Application {} has no link", id);
            return Ok(());
        }

        self.opener.open(&record.url).inspect_err(|e| {
            error!("Failed to open {}: {}", record.url, e);
            self.status_message = get_user_friendly_error(e);
        })
    }

    /// Records passing the current category and search
    pub fn filtered_apps(&self) -> Vec<&AppRecord> {
        filter::filter_apps(
            self.catalog.records(),
            self.active_category,
            &self.search_query,
        )
    }

    /// Favorite records in catalog order
    pub fn favorite_apps(&self) -> Vec<&AppRecord> {
        filter::favorite_apps(self.catalog.records(), self.favorites.favorites())
    }

    /// Quick Access is shown only without a search, on `ALL`, with at least one favorite
    pub fn show_quick_access(&self) -> bool {
        !filter::is_search_active(&self.search_query)
            && self.active_category == CategoryFilter::All
            && !self.favorite_apps().is_empty()
    }

    /// Title above the results grid
    pub fn heading(&self) -> String {
        match self.active_category {
            CategoryFilter::All => "Discovery".to_string(),
            CategoryFilter::Only(category) => format!("{category} Results"),
        }
    }

    /// Build the snapshot rendered by the GUI
    pub fn view(&self) -> PortalView {
        let cards: Vec<CardView> = self
            .filtered_apps()
            .into_iter()
            .map(|record| CardView::new(record, self.favorites.is_favorite(&record.id)))
            .collect();

        let quick_access = if self.show_quick_access() {
            self.favorite_apps()
                .into_iter()
                .map(|record| CardView::new(record, true))
                .collect()
        } else {
            Vec::new()
        };

        PortalView {
            result_count: cards.len(),
            show_empty_state: cards.is_empty(),
            cards,
            quick_access,
            heading: self.heading(),
            dark_mode: self.theme.is_dark(),
            search_query: self.search_query.clone(),
            active_category: self.active_category,
            status_message: self.status_message.clone(),
        }
    }

    /// Current search text
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current category selection
    pub fn active_category(&self) -> CategoryFilter {
        self.active_category
    }

    /// Current favorites
    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.favorites()
    }

    /// Current theme
    pub fn theme(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
