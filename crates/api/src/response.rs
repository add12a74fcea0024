//! Shared response envelope types for API handlers.
//!
//! Mutating endpoints use a `{ "data": ... }` envelope. The catalog
//! listing is the one exception: `GET /guests` returns a bare array for
//! compatibility with existing consumers of the read API.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
