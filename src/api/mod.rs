//! Explorer API collaborators: HTTP client, retry helpers and the
//! fetch seam the pipeline is written against

pub mod client;
pub mod retry;

pub use client::ExplorerClient;
pub use retry::retry_delay;

use crate::errors::ApiResult;
use crate::types::AddressHistory;

/// Source of address histories.
///
/// Implemented by [`ExplorerClient`] in production and by in-memory
/// stubs in tests, so the pipeline never depends on the network.
#[allow(async_fn_in_trait)]
pub trait AddressSource {
    async fn fetch_address(&self, address: &str) -> ApiResult<AddressHistory>;
}
