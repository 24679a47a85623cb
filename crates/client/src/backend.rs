use std::future::Future;
use std::pin::Pin;

use parcels::Parcel;

use crate::error::BackendError;
use crate::wire::ZoningUpdateRequest;

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The zoning backend as seen by the application.
///
/// Methods return boxed futures for dyn-compatibility. Calls have no retry and
/// no timeout; a hung request stays pending until the transport gives up.
pub trait Backend: Send + Sync {
    /// `GET /api/parcels`: the full parcel listing, in backend order.
    fn fetch_parcels(&self) -> BoxFuture<'_, Result<Vec<Parcel>, BackendError>>;

    /// `POST /api/zoning-update`. Any 2xx status is success; the body is ignored.
    fn update_zoning(&self, request: ZoningUpdateRequest) -> BoxFuture<'_, Result<(), BackendError>>;
}
