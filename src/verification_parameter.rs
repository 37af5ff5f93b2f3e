use std::str::FromStr;

use crate::{DateTimeParameter, DidParameter, ParameterType};

/// Closed family of parameters that may accompany a verification request.  The variant is
/// selected by the `parameterType` field of the JSON object, and serializes to exactly the JSON
/// of the contained value.
#[derive(Clone, Debug, Eq, derive_more::From, PartialEq)]
pub enum VerificationParameter {
    DidParameter(DidParameter),
    DateTimeParameter(DateTimeParameter),
}

impl VerificationParameter {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            VerificationParameter::DidParameter(did_parameter) => did_parameter.parameter_type(),
            VerificationParameter::DateTimeParameter(date_time_parameter) => {
                date_time_parameter.parameter_type()
            }
        }
    }
    /// Returns the DID if this is a DidParameter.
    pub fn did_o(&self) -> Option<&str> {
        match self {
            VerificationParameter::DidParameter(did_parameter) => Some(did_parameter.did()),
            VerificationParameter::DateTimeParameter(_) => None,
        }
    }
    /// The point in time carried by either variant, if any.
    pub fn date_time_o(&self) -> Option<time::OffsetDateTime> {
        match self {
            VerificationParameter::DidParameter(did_parameter) => did_parameter.date_time_o(),
            VerificationParameter::DateTimeParameter(date_time_parameter) => {
                Some(date_time_parameter.date_time())
            }
        }
    }
}

impl serde::Serialize for VerificationParameter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VerificationParameter::DidParameter(did_parameter) => {
                serde::Serialize::serialize(did_parameter, serializer)
            }
            VerificationParameter::DateTimeParameter(date_time_parameter) => {
                serde::Serialize::serialize(date_time_parameter, serializer)
            }
        }
    }
}

impl<'de> serde::Deserialize<'de> for VerificationParameter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
        let parameter_type_str = value
            .get("parameterType")
            .ok_or_else(|| D::Error::missing_field("parameterType"))?
            .as_str()
            .ok_or_else(|| D::Error::custom("parameterType must be a string"))?;
        let parameter_type = ParameterType::from_str(parameter_type_str).map_err(|e| {
            tracing::debug!(
                ?parameter_type_str,
                "VerificationParameter: unrecognized parameterType"
            );
            D::Error::custom(e)
        })?;
        match parameter_type {
            ParameterType::DidParameter => {
                <DidParameter as serde::Deserialize>::deserialize(value)
                    .map(VerificationParameter::from)
                    .map_err(D::Error::custom)
            }
            ParameterType::DateTimeParameter => {
                <DateTimeParameter as serde::Deserialize>::deserialize(value)
                    .map(VerificationParameter::from)
                    .map_err(D::Error::custom)
            }
        }
    }
}
