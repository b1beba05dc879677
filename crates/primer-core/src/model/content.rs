use serde::{Deserialize, Serialize};

/// One slide of the rotating home-page banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

/// Remotely managed marketing copy for the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicContent {
    pub banners: Vec<Banner>,
    pub hero: Hero,
}
