use crate::VcVerification;

#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct VcVerificationResult {
    pub verification: VcVerification,
    pub success: bool,
}
