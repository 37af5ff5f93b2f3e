use crate::{Error, ParameterType};

/// The kinds of checks that can be requested when verifying a credential.
#[derive(
    Clone,
    Copy,
    Debug,
    serde_with::DeserializeFromStr,
    Eq,
    Hash,
    PartialEq,
    serde_with::SerializeDisplay,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VcVerification {
    SignatureVerification,
    IssuerIdentification,
    ExpirationCheck,
    NotBeforeCheck,
    AudienceCheck,
    SubjectVerification,
    IntegrityOfClaims,
    ComplianceWithStandards,
    RevocationCheck,
    AlgorithmVerification,
    SchemaCheck,
    SemanticCheck,
}

impl VcVerification {
    pub const VARIANTS: [VcVerification; 12] = [
        VcVerification::SignatureVerification,
        VcVerification::IssuerIdentification,
        VcVerification::ExpirationCheck,
        VcVerification::NotBeforeCheck,
        VcVerification::AudienceCheck,
        VcVerification::SubjectVerification,
        VcVerification::IntegrityOfClaims,
        VcVerification::ComplianceWithStandards,
        VcVerification::RevocationCheck,
        VcVerification::AlgorithmVerification,
        VcVerification::SchemaCheck,
        VcVerification::SemanticCheck,
    ];
    pub fn as_str(&self) -> &'static str {
        match self {
            VcVerification::SignatureVerification => "SignatureVerification",
            VcVerification::IssuerIdentification => "IssuerIdentification",
            VcVerification::ExpirationCheck => "ExpirationCheck",
            VcVerification::NotBeforeCheck => "NotBeforeCheck",
            VcVerification::AudienceCheck => "AudienceCheck",
            VcVerification::SubjectVerification => "SubjectVerification",
            VcVerification::IntegrityOfClaims => "IntegrityOfClaims",
            VcVerification::ComplianceWithStandards => "ComplianceWithStandards",
            VcVerification::RevocationCheck => "RevocationCheck",
            VcVerification::AlgorithmVerification => "AlgorithmVerification",
            VcVerification::SchemaCheck => "SchemaCheck",
            VcVerification::SemanticCheck => "SemanticCheck",
        }
    }
    /// Which verification parameter variant this check accepts, or None if it takes no parameter.
    /// DID-based checks take a DidParameter (the signature check uses its optional dateTime to
    /// select the DID document version); time-based checks take a DateTimeParameter.
    pub fn accepted_parameter_type_o(&self) -> Option<ParameterType> {
        match self {
            VcVerification::SignatureVerification
            | VcVerification::IssuerIdentification
            | VcVerification::AudienceCheck
            | VcVerification::SubjectVerification => Some(ParameterType::DidParameter),
            VcVerification::ExpirationCheck | VcVerification::NotBeforeCheck => {
                Some(ParameterType::DateTimeParameter)
            }
            VcVerification::IntegrityOfClaims
            | VcVerification::ComplianceWithStandards
            | VcVerification::RevocationCheck
            | VcVerification::AlgorithmVerification
            | VcVerification::SchemaCheck
            | VcVerification::SemanticCheck => None,
        }
    }
}

impl std::fmt::Display for VcVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VcVerification {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .into_iter()
            .find(|vc_verification| vc_verification.as_str() == s)
            .ok_or(Error::Unrecognized("VcVerification"))
    }
}
