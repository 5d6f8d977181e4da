//! Success envelope shared by every data-returning endpoint.

use serde::Serialize;

/// Wraps a payload as `{ "data": ... }`.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
