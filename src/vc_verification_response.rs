use crate::{VcVerification, VcVerificationResult};

/// Outcome of a VcVerificationRequest, with one result per requested check.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct VcVerificationResponse {
    pub credential: String,
    #[serde(default)]
    pub result: Vec<VcVerificationResult>,
}

impl VcVerificationResponse {
    /// True iff every reported check succeeded.  Vacuously true if there are no results.
    pub fn is_success(&self) -> bool {
        self.result.iter().all(|r| r.success)
    }
    pub fn failed_verifications(&self) -> impl Iterator<Item = VcVerification> + '_ {
        self.result
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.verification)
    }
    /// Returns the first result reported for the given check, if any.
    pub fn result_for(&self, verification: VcVerification) -> Option<&VcVerificationResult> {
        self.result.iter().find(|r| r.verification == verification)
    }
}
