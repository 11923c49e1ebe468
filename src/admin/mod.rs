//! # Tunables Admin
//!
//! Request handling for `PUT`/`DELETE /admin/tunables/{id}`.
//!
//! - `validator` - method and content-type preconditions
//! - `codec` - JSON body to typed descriptors
//! - `resolver` - path to collection
//! - `merge` - merge-upsert and selective remove
//! - `response` - outcome to status and body
//! - `handler` - the pipeline tying them together

pub mod codec;
pub mod errors;
pub mod handler;
pub mod merge;
pub mod resolver;
pub mod response;
pub mod validator;

pub use codec::{decode_descriptors, decode_request, TunableDescriptor, TunableUpdateRequest, WireDescriptor};
pub use errors::{AdminError, AdminResult};
pub use handler::TunablesAdmin;
pub use merge::{ApplyFailure, MergeOutcome};
pub use resolver::TUNABLES_PATH;
pub use response::{build_response, CollectionsResponse, ErrorResponse, UpdateResponse};
pub use validator::UpdateMethod;
