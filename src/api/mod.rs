//! HTTP API for the finance display.
//!
//! This module provides the REST endpoints the data-entry form and the
//! kiosk chart poll: the full data bundle, record mutations, and the
//! engine's incoming-pay figures.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NewBalanceSnapshot, NewWorkLog};
pub use response::{ApiError, ApiOk, IncomingPayResponse};
pub use state::AppState;
