// Adapters layer: concrete implementations for external systems (product pages, user input).

pub mod named;
pub mod title_scraper;

pub use named::NamedProduct;
pub use title_scraper::TitleScraper;
