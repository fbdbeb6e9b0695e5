//! FORS Client - HTTP client for the commerce backend
//!
//! Provides network-based HTTP calls to the FORS API (drops, orders,
//! payments, shipping, auth). All business logic lives server-side; this
//! crate is a typed, cookie-authenticated transport plus the [`CommerceApi`]
//! trait the application layer programs against.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "mock")]
pub mod mock;

pub use api::{CommerceApi, new_idempotency_key};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{
    CreateOrderRequest, CreateOrderResponse, LoginRequest, PayOutcome, PayRequest, PayResponse,
    SignupRequest,
};
pub use shared::models::{DropEvent, DropStatus, DropStock, Order, OrderStatus, User, UserRole};
