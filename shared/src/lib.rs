//! Shared types for the FORS storefront client
//!
//! Wire-level representations of server-owned records (users, drops, orders)
//! and the request/response DTOs for the commerce API. The backend owns all
//! authoritative state; these types are short-lived client copies.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    CreateOrderRequest, CreateOrderResponse, LoginRequest, PayOutcome, PayRequest, PayResponse,
    SignupRequest,
};
pub use models::{DropEvent, DropStatus, DropStock, Order, OrderStatus, User, UserRole};
