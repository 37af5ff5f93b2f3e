use crate::{Error, ParameterizableVcVerification, Result};

/// Request body asking for a set of checks to be run against a credential.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct VcVerificationRequest {
    /// The encoded credential (e.g. a JWT) to verify.
    pub credential: String,
    #[serde(default)]
    pub verifications: Vec<ParameterizableVcVerification>,
}

impl VcVerificationRequest {
    pub fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            verifications: Vec::new(),
        }
    }
    pub fn with_verification(
        mut self,
        verification: impl Into<ParameterizableVcVerification>,
    ) -> Self {
        self.verifications.push(verification.into());
        self
    }
    pub fn verify(&self) -> Result<()> {
        tracing::trace!(
            verification_count = self.verifications.len(),
            "VcVerificationRequest::verify"
        );
        if self.credential.is_empty() {
            return Err(Error::Invalid("VcVerificationRequest credential is empty"));
        }
        for verification in self.verifications.iter() {
            verification.verify()?;
        }
        Ok(())
    }
}
