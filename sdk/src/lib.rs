//! Shared plumbing of the resource-manager service packages: the discriminated-union decoder,
//! open string enums, resource identifiers and the REST client.

pub mod client;
pub mod commonids;
pub mod credential;
pub mod enums;
pub mod pager;
pub mod polymorphic;
pub mod resourceids;

// used by the exported macros
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;
#[doc(hidden)]
pub use strum_macros;

pub use client::{OperationResponse, RequestOptions, ResourceManagerClient};
pub use resourceids::ResourceId;
