pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{Fetch, FileFetcher, HttpFetcher, SiteFetcher};
