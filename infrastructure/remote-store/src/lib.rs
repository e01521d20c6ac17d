pub mod client;
pub mod dto;
pub mod http_store;
pub mod normalize;

pub use client::StoreClient;
pub use http_store::HttpProductStore;
