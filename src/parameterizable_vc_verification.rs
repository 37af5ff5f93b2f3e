use crate::{Error, Result, VcVerification, VerificationParameter};

/// One requested check together with the parameter it should be run against, if any.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
pub struct ParameterizableVcVerification {
    pub verification: VcVerification,
    #[serde(rename = "parameter", default, skip_serializing_if = "Option::is_none")]
    pub parameter_o: Option<VerificationParameter>,
}

impl ParameterizableVcVerification {
    pub fn new(verification: VcVerification) -> Self {
        Self {
            verification,
            parameter_o: None,
        }
    }
    pub fn with_parameter(mut self, parameter: impl Into<VerificationParameter>) -> Self {
        self.parameter_o = Some(parameter.into());
        self
    }
    /// Checks that the parameter, if present, is of the variant this verification accepts.
    pub fn verify(&self) -> Result<()> {
        tracing::trace!(
            verification = %self.verification,
            parameter_type_o = ?self.parameter_o.as_ref().map(|p| p.parameter_type()),
            "ParameterizableVcVerification::verify"
        );
        let Some(parameter) = self.parameter_o.as_ref() else {
            return Ok(());
        };
        match self.verification.accepted_parameter_type_o() {
            None => Err(Error::Malformed("verification does not accept a parameter")),
            Some(accepted_parameter_type)
                if accepted_parameter_type != parameter.parameter_type() =>
            {
                Err(Error::Malformed(
                    "parameterType does not match the parameter accepted by the verification",
                ))
            }
            Some(_) => Ok(()),
        }
    }
}

impl From<VcVerification> for ParameterizableVcVerification {
    fn from(verification: VcVerification) -> Self {
        Self::new(verification)
    }
}
