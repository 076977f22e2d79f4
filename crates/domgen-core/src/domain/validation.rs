use crate::domain::{
    entities::{GenerationPlan, GenerationRequest, PackageLocation},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Resolve the request's location, failing when the marker is absent.
    pub fn validate_request(request: &GenerationRequest) -> Result<PackageLocation, DomainError> {
        request.location()
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
