//! Catalog seeding.
//!
//! Inserts a small sample catalog for local development: a few categories,
//! artists, and artworks. Idempotence is intentionally not attempted -
//! running seed twice doubles the catalog, which is fine for a scratch
//! database.

use super::{CommandError, connect};

struct SeedArtwork {
    title: &'static str,
    artist: &'static str,
    style: &'static str,
    description: &'static str,
    price: i64,
    likes: i64,
}

const CATEGORIES: &[&str] = &["Abstract", "Impressionism", "Realism"];

const ARTISTS: &[(&str, &str)] = &[
    (
        "Eleanor Vance",
        "Abstract painter exploring dreams and the cosmos.",
    ),
    (
        "Marco Diaz",
        "Impressionist chronicler of city streets at dusk.",
    ),
    (
        "Clara Renault",
        "Realist devoted to the interplay of light and water.",
    ),
];

const ARTWORKS: &[SeedArtwork] = &[
    SeedArtwork {
        title: "Celestial Dream",
        artist: "Eleanor Vance",
        style: "Abstract",
        description: "An abstract representation of a star-filled night sky, \
                      exploring the themes of dreams and the cosmos.",
        price: 850,
        likes: 42,
    },
    SeedArtwork {
        title: "Urban Pulse",
        artist: "Marco Diaz",
        style: "Impressionism",
        description: "The vibrant, bustling energy of a city street at dusk, \
                      captured with bold strokes and a rich color palette.",
        price: 1200,
        likes: 101,
    },
    SeedArtwork {
        title: "Serene Lakeside",
        artist: "Clara Renault",
        style: "Realism",
        description: "A hyper-realistic depiction of a calm lakeside at dawn, \
                      focusing on the interplay of light and water.",
        price: 2500,
        likes: 88,
    },
];

/// Insert the sample catalog.
///
/// # Errors
///
/// Returns `CommandError::Database` if any insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect("ADMIN_DATABASE_URL").await?;

    for name in CATEGORIES {
        sqlx::query("INSERT INTO categories (name) VALUES ($1)")
            .bind(name)
            .execute(&pool)
            .await?;
    }

    for (name, bio) in ARTISTS {
        sqlx::query("INSERT INTO artists (name, bio, image_url) VALUES ($1, $2, '')")
            .bind(name)
            .bind(bio)
            .execute(&pool)
            .await?;
    }

    for artwork in ARTWORKS {
        sqlx::query(
            "INSERT INTO artworks (title, artist, style, description, price, image_url, likes) \
             VALUES ($1, $2, $3, $4, $5, '', $6)",
        )
        .bind(artwork.title)
        .bind(artwork.artist)
        .bind(artwork.style)
        .bind(artwork.description)
        .bind(artwork.price)
        .bind(artwork.likes)
        .execute(&pool)
        .await?;
    }

    tracing::info!(
        categories = CATEGORIES.len(),
        artists = ARTISTS.len(),
        artworks = ARTWORKS.len(),
        "catalog seeded"
    );
    Ok(())
}
