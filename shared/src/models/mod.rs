//! Data models
//!
//! Client-side copies of records the backend serves over `/api`.
//! All IDs are `i64` (the superseded string-id mock shape is gone).
//! Timestamps stay as the backend's ISO strings; the client only
//! parses them where a display actually needs arithmetic.

pub mod drop_event;
pub mod order;
pub mod user;

// Re-exports
pub use drop_event::*;
pub use order::*;
pub use user::*;
