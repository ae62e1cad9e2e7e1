pub mod client;
pub mod video_catalog;
