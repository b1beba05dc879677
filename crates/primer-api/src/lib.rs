// primer-api: Async client for the Primer listings, content and location feeds

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::FeedClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    BannerRecord, CoordinatesRecord, DynamicDocument, FeatureRecord, GeoPosition, HeroRecord,
    LandlordRecord, ListingsDocument, PropertyRecord,
};
