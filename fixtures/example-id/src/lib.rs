//! Typed identifier example exercised by the verification harness.

use identificar::typed_id;
use uuid::Uuid;

/// Identity of an aggregate root.
#[typed_id(raw_uuid)]
pub struct AggregateId;

/// Converts raw uuids into typed aggregate identifiers.
pub struct Service;

impl Service {
    /// Wraps a raw uuid in the generated identifier type.
    #[must_use]
    pub fn parse(&self, raw: Uuid) -> AggregateId {
        AggregateId::from_uuid(raw)
    }
}
