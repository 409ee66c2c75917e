pub mod fallback;
pub mod health;
pub mod index;

pub use fallback::fallback_handler;
pub use health::health_handler;
pub use index::index_handler;
