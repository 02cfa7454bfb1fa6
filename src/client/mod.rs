//! Request execution layer.
//!
//! Services describe calls as [`ApiRequest`] values; the shared
//! [`RequestExecutor`] sends them and decodes typed results. Failures are
//! reported through [`ClientError`].

mod errors;
mod executor;
mod request;
mod response;

pub use errors::{ClientError, InvalidRequestError};
pub use executor::{to_query, RequestExecutor, CLIENT_VERSION};
pub use request::{ApiRequest, Method};
pub use response::ApiResponse;
