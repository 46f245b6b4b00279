//! Site-settings singleton.

use serde::{Deserialize, Serialize};

/// Site-wide settings, read on every page and written only by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SiteSettings {
    pub logo_url: String,
    pub site_description: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub twitter_url: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}
