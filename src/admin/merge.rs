//! # Merge Applier
//!
//! PUT merges: named ids are created or overwritten, everything else is
//! left alone. DELETE removes only the named ids. Descriptors apply one at
//! a time in request order and nothing is rolled back.

use tracing::{debug, warn};

use crate::tunable::{TunableCollection, TunableError};

use super::codec::TunableUpdateRequest;
use super::validator::UpdateMethod;

/// What a batch did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOutcome {
    /// Descriptors applied, in total
    pub applied: usize,
    pub created: usize,
    pub updated: usize,
    /// Updates whose declared type differed from the replaced entry
    pub retyped: usize,
    pub removed: usize,
    /// DELETEs naming an id that was not present
    pub missing: usize,
}

/// A collection error part-way through a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyFailure {
    /// Work done before the failing descriptor
    pub outcome: MergeOutcome,
    pub failed_id: String,
    pub error: TunableError,
}

pub fn apply(
    collection: &dyn TunableCollection,
    request: &TunableUpdateRequest,
    method: UpdateMethod,
) -> Result<MergeOutcome, ApplyFailure> {
    let mut outcome = MergeOutcome::default();

    for descriptor in request.descriptors() {
        let result = match method {
            UpdateMethod::Put => collection
                .put(&descriptor.id, &descriptor.type_name, descriptor.value.clone())
                .map(|previous| match previous {
                    None => outcome.created += 1,
                    Some(previous) => {
                        outcome.updated += 1;
                        if previous.type_name != descriptor.type_name {
                            outcome.retyped += 1;
                            warn!(
                                tunable = %descriptor.id,
                                from = %previous.type_name,
                                to = %descriptor.type_name,
                                "tunable type overwritten"
                            );
                        }
                    }
                }),
            UpdateMethod::Delete => collection.remove(&descriptor.id).map(|removed| {
                if removed.is_some() {
                    outcome.removed += 1;
                } else {
                    outcome.missing += 1;
                }
            }),
        };

        if let Err(error) = result {
            return Err(ApplyFailure {
                outcome,
                failed_id: descriptor.id.clone(),
                error,
            });
        }

        outcome.applied += 1;
        debug!(tunable = %descriptor.id, %method, "tunable applied");
    }

    Ok(outcome)
}
