//! HTTP controller endpoints for the parish catalog API.
//!
//! Controllers extract request data, call into the services and map results to HTTP
//! responses. Each handler carries a utoipa annotation so it appears in the OpenAPI
//! document served by the router.

pub mod catalog;
pub mod inventory;
pub mod parish;
