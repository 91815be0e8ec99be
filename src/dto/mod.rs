pub mod application;
pub mod null_default;
pub mod odds;
pub mod status;

// Re-export commonly used types for convenience
pub use application::*;
pub use odds::*;
pub use status::*;
