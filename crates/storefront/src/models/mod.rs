//! Domain types for the storefront.
//!
//! These types represent validated domain objects; raw store rows are
//! decoded into them at the repository boundary.

pub mod artist;
pub mod artwork;
pub mod order;
pub mod session;
pub mod settings;
pub mod user;

pub use artist::Artist;
pub use artwork::{Artwork, Category, NewArtwork};
pub use order::{NewOrder, Order, ProviderConfirmation};
pub use session::{CurrentUser, session_keys};
pub use settings::SiteSettings;
pub use user::User;
