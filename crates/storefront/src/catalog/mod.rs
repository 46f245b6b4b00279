//! Gallery filter/sort/search pipeline.
//!
//! Derives the visible, ordered artwork list from the full catalog plus the
//! shopper's navigation state. Pure and synchronous: the same inputs always
//! produce the same output, so it is safe to re-run on every request.
//!
//! Stages run in a fixed order - search, section filter, style filter,
//! ordering - and the order is load-bearing: the section filter narrows by
//! style before the style dropdown applies, and section-driven orderings
//! override the explicit sort selection.

use serde::{Deserialize, Serialize};

use crate::models::Artwork;

/// The four fixed navigation sections. Any other section value is treated
/// as a category name.
const FIXED_SECTIONS: [&str; 4] = ["Home", "New Arrivals", "Best Sellers", "Wall Art"];

/// Style filter value meaning "no filter".
pub const ALL_STYLES: &str = "All";

/// The active top-level navigation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Home,
    /// Orders by creation time, newest first.
    NewArrivals,
    /// Orders by like count, most liked first.
    BestSellers,
    WallArt,
    /// A dynamic category: filters to artworks whose style equals the name.
    Category(String),
}

impl Section {
    /// Parse a section label. Unknown labels become [`Section::Category`].
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label {
            "Home" => Self::Home,
            "New Arrivals" => Self::NewArrivals,
            "Best Sellers" => Self::BestSellers,
            "Wall Art" => Self::WallArt,
            other => Self::Category(other.to_owned()),
        }
    }

    /// The label as shown in navigation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::NewArrivals => "New Arrivals",
            Self::BestSellers => "Best Sellers",
            Self::WallArt => "Wall Art",
            Self::Category(name) => name,
        }
    }

    /// Whether this is one of the four fixed labels.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        FIXED_SECTIONS.contains(&self.as_str())
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::Home
    }
}

/// Explicit sort selection, applied when the section does not dictate one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    #[default]
    Newest,
}

impl SortOrder {
    /// Parse from URL parameter value. Anything unrecognized falls back to
    /// newest-first, the default.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            _ => Self::Newest,
        }
    }

    /// Convert to URL parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }
}

/// The shopper's complete filter/sort/search state.
#[derive(Debug, Default, Clone)]
pub struct GalleryQuery {
    /// Free-text query; matches title or artist, case-insensitively.
    pub search: String,
    pub section: Section,
    /// Exact style, or [`ALL_STYLES`].
    pub style_filter: String,
    pub sort: SortOrder,
}

impl GalleryQuery {
    /// Run the pipeline over `items`, producing the ordered, filtered list.
    ///
    /// Ties in every ordering break by artwork id ascending, so the output
    /// is deterministic regardless of input order.
    #[must_use]
    pub fn apply(&self, items: &[Artwork]) -> Vec<Artwork> {
        let mut result: Vec<Artwork> = items.to_vec();

        // 1. Free-text search on title or artist.
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            result.retain(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.artist.to_lowercase().contains(&needle)
            });
        }

        // 2. A category section narrows to its style.
        if let Section::Category(name) = &self.section {
            result.retain(|a| a.style == *name);
        }

        // 3. The style dropdown applies on top of the section filter.
        if !self.style_filter.is_empty() && self.style_filter != ALL_STYLES {
            result.retain(|a| a.style == self.style_filter);
        }

        // 4. Section-driven orderings take precedence over the sort control.
        match self.section {
            Section::NewArrivals => {
                result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
            }
            Section::BestSellers => {
                result.sort_by(|a, b| b.likes.cmp(&a.likes).then(a.id.cmp(&b.id)));
            }
            _ => match self.sort {
                SortOrder::PriceAsc => {
                    result.sort_by(|a, b| a.price.cmp(&b.price).then(a.id.cmp(&b.id)));
                }
                SortOrder::PriceDesc => {
                    result.sort_by(|a, b| b.price.cmp(&a.price).then(a.id.cmp(&b.id)));
                }
                SortOrder::Newest => {
                    result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
                }
            },
        }

        result
    }
}

/// The options offered by the style filter control: "All" followed by the
/// distinct styles of `items` in first-seen order.
#[must_use]
pub fn style_options(items: &[Artwork]) -> Vec<String> {
    let mut options = vec![ALL_STYLES.to_owned()];
    for artwork in items {
        if !options.iter().any(|s| s == &artwork.style) {
            options.push(artwork.style.clone());
        }
    }
    options
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};

    use atelier_core::{ArtworkId, Price};

    use super::*;

    fn artwork(id: i32, title: &str, artist: &str, style: &str, price: i64) -> Artwork {
        Artwork {
            id: ArtworkId::new(id),
            title: title.to_owned(),
            artist: artist.to_owned(),
            style: style.to_owned(),
            description: String::new(),
            price: Price::new(price).unwrap(),
            image_url: String::new(),
            likes: 0,
            created_at: Utc.timestamp_opt(1_700_000_000 + i64::from(id), 0).unwrap(),
            available_sizes: Vec::new(),
            submitted_by: None,
        }
    }

    fn sample_catalog() -> Vec<Artwork> {
        vec![
            artwork(1, "Celestial Dream", "Eleanor Vance", "Abstract", 850),
            artwork(2, "Urban Pulse", "Marco Diaz", "Impressionism", 1200),
            artwork(3, "Serene Lakeside", "Clara Renault", "Realism", 2500),
            artwork(4, "Starry Night Study", "Van Gogh", "Impressionism", 850),
        ]
    }

    #[test]
    fn test_all_filter_is_permutation_of_input() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            style_filter: ALL_STYLES.to_owned(),
            ..GalleryQuery::default()
        };

        let mut result_ids: Vec<i32> = query
            .apply(&catalog)
            .iter()
            .map(|a| a.id.as_i32())
            .collect();
        result_ids.sort_unstable();
        assert_eq!(result_ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_price_asc_is_monotone_with_duplicates() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            style_filter: ALL_STYLES.to_owned(),
            sort: SortOrder::PriceAsc,
            ..GalleryQuery::default()
        };

        let result = query.apply(&catalog);
        for pair in result.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
        // Duplicate prices tie-break by id ascending.
        assert_eq!(result[0].id.as_i32(), 1);
        assert_eq!(result[1].id.as_i32(), 4);
    }

    #[test]
    fn test_best_sellers_orders_by_likes_desc() {
        let mut catalog = sample_catalog();
        catalog[0].likes = 42;
        catalog[1].likes = 101;
        catalog[2].likes = 88;
        // catalog[3] keeps the absent-count default of 0.

        let query = GalleryQuery {
            section: Section::BestSellers,
            style_filter: ALL_STYLES.to_owned(),
            ..GalleryQuery::default()
        };

        let result = query.apply(&catalog);
        let likes: Vec<i64> = result.iter().map(|a| a.likes).collect();
        assert_eq!(likes, vec![101, 88, 42, 0]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_artist() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            search: "van gogh".to_owned(),
            style_filter: ALL_STYLES.to_owned(),
            ..GalleryQuery::default()
        };

        let result = query.apply(&catalog);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].artist, "Van Gogh");
    }

    #[test]
    fn test_search_matches_title_too() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            search: "URBAN".to_owned(),
            style_filter: ALL_STYLES.to_owned(),
            ..GalleryQuery::default()
        };

        assert_eq!(query.apply(&catalog).len(), 1);
    }

    #[test]
    fn test_price_asc_scenario_two_items() {
        let catalog = vec![
            artwork(1, "A", "X", "Abstract", 100),
            artwork(2, "B", "Y", "Abstract", 50),
        ];
        let query = GalleryQuery {
            section: Section::Home,
            style_filter: ALL_STYLES.to_owned(),
            sort: SortOrder::PriceAsc,
            ..GalleryQuery::default()
        };

        let result = query.apply(&catalog);
        let titles: Vec<&str> = result.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_category_section_filters_by_style() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            section: Section::parse("Impressionism"),
            style_filter: ALL_STYLES.to_owned(),
            ..GalleryQuery::default()
        };

        let result = query.apply(&catalog);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|a| a.style == "Impressionism"));
    }

    #[test]
    fn test_fixed_sections_do_not_filter() {
        let catalog = sample_catalog();
        for label in FIXED_SECTIONS {
            let query = GalleryQuery {
                section: Section::parse(label),
                style_filter: ALL_STYLES.to_owned(),
                ..GalleryQuery::default()
            };
            assert_eq!(query.apply(&catalog).len(), catalog.len(), "{label}");
        }
    }

    #[test]
    fn test_style_filter_stacks_with_section() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            section: Section::parse("Impressionism"),
            style_filter: "Realism".to_owned(),
            ..GalleryQuery::default()
        };

        // Section narrows to Impressionism, then the dropdown demands
        // Realism: nothing survives both.
        assert!(query.apply(&catalog).is_empty());
    }

    #[test]
    fn test_new_arrivals_orders_newest_first() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            section: Section::NewArrivals,
            style_filter: ALL_STYLES.to_owned(),
            // Sort control is ignored while a section ordering applies.
            sort: SortOrder::PriceAsc,
            ..GalleryQuery::default()
        };

        let ids: Vec<i32> = query.apply(&catalog).iter().map(|a| a.id.as_i32()).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let query = GalleryQuery {
            search: "anything".to_owned(),
            section: Section::BestSellers,
            style_filter: "Nonexistent".to_owned(),
            ..GalleryQuery::default()
        };
        assert!(query.apply(&[]).is_empty());
    }

    #[test]
    fn test_unmatched_style_filter_yields_empty() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            style_filter: "Cubism".to_owned(),
            ..GalleryQuery::default()
        };
        assert!(query.apply(&catalog).is_empty());
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let catalog = sample_catalog();
        let query = GalleryQuery {
            style_filter: ALL_STYLES.to_owned(),
            sort: SortOrder::PriceDesc,
            ..GalleryQuery::default()
        };
        assert_eq!(query.apply(&catalog), query.apply(&catalog));
    }

    #[test]
    fn test_style_options_all_first_then_first_seen_order() {
        let catalog = sample_catalog();
        assert_eq!(
            style_options(&catalog),
            vec!["All", "Abstract", "Impressionism", "Realism"]
        );
    }

    #[test]
    fn test_style_options_empty_catalog() {
        assert_eq!(style_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_sort_order_parse_roundtrip() {
        assert_eq!(SortOrder::parse("price-asc"), SortOrder::PriceAsc);
        assert_eq!(SortOrder::parse("price-desc"), SortOrder::PriceDesc);
        assert_eq!(SortOrder::parse("anything-else"), SortOrder::Newest);
        assert_eq!(SortOrder::PriceAsc.as_str(), "price-asc");
    }

    #[test]
    fn test_section_parse() {
        assert_eq!(Section::parse("Home"), Section::Home);
        assert_eq!(Section::parse("New Arrivals"), Section::NewArrivals);
        assert_eq!(
            Section::parse("Watercolor"),
            Section::Category("Watercolor".to_owned())
        );
        assert!(Section::Home.is_fixed());
        assert!(!Section::parse("Watercolor").is_fixed());
    }
}
