//! FORS App - client-side order workflow coordinator
//!
//! View-model layer for the FORS storefront: session context, drop catalog,
//! checkout state machine, order history with read-time drop enrichment,
//! admin order console, toast notifications and the fragment route table.
//!
//! Every piece of state here is a short-lived copy of server-authoritative
//! data. View-models fetch, render and request transitions; they never derive
//! the next status locally.

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod context;
pub mod notify;
pub mod orders;
pub mod router;
pub mod session;
pub mod util;

pub use admin::AdminConsole;
pub use catalog::{Catalog, DropTab};
pub use checkout::{Checkout, CheckoutPhase};
pub use context::AppContext;
pub use notify::{Notifier, Toast, ToastKind, TOAST_TTL};
pub use orders::{OrderDisplay, OrderHistory, OrderView, Timeline};
pub use router::{Resolution, Route};
pub use session::{AuthPhase, Session};
