//! Integration tests for the gallery filter/sort/search pipeline.
//!
//! These exercise the pipeline the way the catalog route does: a full
//! catalog snapshot in, an ordered gallery out.

use atelier_integration_tests::artwork;
use atelier_storefront::catalog::{ALL_STYLES, GalleryQuery, Section, SortOrder, style_options};
use atelier_storefront::models::Artwork;

fn gallery() -> Vec<Artwork> {
    vec![
        artwork(1, "Celestial Dream", "Eleanor Vance", "Abstract", 850, 42),
        artwork(2, "Urban Pulse", "Marco Diaz", "Impressionism", 1200, 101),
        artwork(3, "Serene Lakeside", "Clara Renault", "Realism", 2500, 88),
        artwork(4, "Starry Night Study", "Van Gogh", "Impressionism", 850, 0),
        artwork(5, "Dream in Blue", "Eleanor Vance", "Abstract", 850, 7),
    ]
}

#[test]
fn all_style_filter_never_drops_matching_items() {
    let catalog = gallery();

    // Across every section and sort, "All" keeps the full search result set.
    for section in ["Home", "New Arrivals", "Best Sellers", "Wall Art"] {
        for sort in ["price-asc", "price-desc", "newest"] {
            let query = GalleryQuery {
                search: "dream".to_owned(),
                section: Section::parse(section),
                style_filter: ALL_STYLES.to_owned(),
                sort: SortOrder::parse(sort),
            };
            let result = query.apply(&catalog);
            let mut ids: Vec<i32> = result.iter().map(|a| a.id.as_i32()).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 5], "section={section} sort={sort}");
        }
    }
}

#[test]
fn price_ascending_is_monotone_including_duplicates() {
    let catalog = gallery();
    let query = GalleryQuery {
        search: String::new(),
        section: Section::Home,
        style_filter: ALL_STYLES.to_owned(),
        sort: SortOrder::PriceAsc,
    };

    let result = query.apply(&catalog);
    assert_eq!(result.len(), catalog.len());
    for pair in result.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
}

#[test]
fn best_sellers_sorts_by_likes_with_missing_counts_last() {
    let catalog = gallery();
    let query = GalleryQuery {
        search: String::new(),
        section: Section::BestSellers,
        style_filter: ALL_STYLES.to_owned(),
        sort: SortOrder::Newest,
    };

    let likes: Vec<i64> = query.apply(&catalog).iter().map(|a| a.likes).collect();
    assert_eq!(likes, vec![101, 88, 42, 7, 0]);
}

#[test]
fn search_is_case_insensitive_across_title_and_artist() {
    let catalog = gallery();

    for needle in ["van gogh", "VAN GOGH", "Van Gogh"] {
        let query = GalleryQuery {
            search: needle.to_owned(),
            section: Section::Home,
            style_filter: ALL_STYLES.to_owned(),
            sort: SortOrder::Newest,
        };
        let result = query.apply(&catalog);
        assert_eq!(result.len(), 1, "needle={needle}");
        assert_eq!(result[0].id.as_i32(), 4);
    }
}

#[test]
fn category_section_composes_with_search_and_sort() {
    let catalog = gallery();
    let query = GalleryQuery {
        search: String::new(),
        section: Section::parse("Impressionism"),
        style_filter: ALL_STYLES.to_owned(),
        sort: SortOrder::PriceAsc,
    };

    let result = query.apply(&catalog);
    let ids: Vec<i32> = result.iter().map(|a| a.id.as_i32()).collect();
    // Both impressionist pieces, cheaper (and lower id on ties) first.
    assert_eq!(ids, vec![4, 2]);
}

#[test]
fn style_options_reflect_catalog_in_first_seen_order() {
    let catalog = gallery();
    assert_eq!(
        style_options(&catalog),
        vec!["All", "Abstract", "Impressionism", "Realism"]
    );
}
