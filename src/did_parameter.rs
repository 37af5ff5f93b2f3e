use crate::{is_rfc3339_encodable, Error, ParameterType, Result};

/// Identifies a DID, optionally qualified by the point in time at which it is to be considered
/// (e.g. which DID document version was in effect when a credential was signed).
///
/// The JSON form is `{"did": ..., "parameterType": "DidParameter", "dateTime": ...}`, where
/// `dateTime` is omitted when absent.  The `parameterType` tag is not stored; it is implied by the
/// type, so a `DidParameter` can't be constructed with any other tag, and decoding rejects any
/// other tag.  The `did` value is not validated here.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(into = "DidParameterJSON", try_from = "DidParameterJSON")]
pub struct DidParameter {
    did: String,
    date_time_o: Option<time::OffsetDateTime>,
}

impl DidParameter {
    pub const PARAMETER_TYPE: ParameterType = ParameterType::DidParameter;

    pub fn new(did: impl Into<String>) -> Self {
        let did = did.into();
        tracing::trace!(?did, "DidParameter::new");
        Self {
            did,
            date_time_o: None,
        }
    }
    pub fn new_at(did: impl Into<String>, date_time: time::OffsetDateTime) -> Result<Self> {
        Self::new(did).with_date_time(date_time)
    }
    /// Builder-style method to set the point-in-time qualifier.  Returns error if the timestamp
    /// can't be represented in RFC 3339 (see [`is_rfc3339_encodable`]).
    pub fn with_date_time(mut self, date_time: time::OffsetDateTime) -> Result<Self> {
        if !is_rfc3339_encodable(date_time) {
            return Err(Error::Invalid(
                "DidParameter dateTime must have a year in 0..=9999 and a whole-minute offset",
            ));
        }
        self.date_time_o = Some(date_time);
        Ok(self)
    }
    pub fn did(&self) -> &str {
        self.did.as_str()
    }
    pub fn date_time_o(&self) -> Option<time::OffsetDateTime> {
        self.date_time_o
    }
    pub fn parameter_type(&self) -> ParameterType {
        Self::PARAMETER_TYPE
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
struct DidParameterJSON {
    did: String,
    #[serde(rename = "parameterType")]
    parameter_type: ParameterType,
    #[serde(
        rename = "dateTime",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    date_time_o: Option<time::OffsetDateTime>,
}

impl From<DidParameter> for DidParameterJSON {
    fn from(did_parameter: DidParameter) -> Self {
        Self {
            did: did_parameter.did,
            parameter_type: DidParameter::PARAMETER_TYPE,
            date_time_o: did_parameter.date_time_o,
        }
    }
}

impl TryFrom<DidParameterJSON> for DidParameter {
    type Error = Error;
    fn try_from(did_parameter_json: DidParameterJSON) -> std::result::Result<Self, Self::Error> {
        if did_parameter_json.parameter_type != DidParameter::PARAMETER_TYPE {
            tracing::debug!(
                parameter_type = %did_parameter_json.parameter_type,
                "DidParameter: rejecting mismatched parameterType"
            );
            return Err(Error::Malformed(
                "DidParameter requires parameterType \"DidParameter\"",
            ));
        }
        Ok(Self {
            did: did_parameter_json.did,
            date_time_o: did_parameter_json.date_time_o,
        })
    }
}
