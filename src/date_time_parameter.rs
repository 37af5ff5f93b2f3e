use crate::{is_rfc3339_encodable, Error, ParameterType, Result};

/// A point in time supplied to a time-based verification (expiration, not-before).  JSON form is
/// `{"parameterType": "DateTimeParameter", "dateTime": ...}`.
#[derive(Clone, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(into = "DateTimeParameterJSON", try_from = "DateTimeParameterJSON")]
pub struct DateTimeParameter {
    date_time: time::OffsetDateTime,
}

impl DateTimeParameter {
    pub const PARAMETER_TYPE: ParameterType = ParameterType::DateTimeParameter;

    /// Returns error if the timestamp can't be represented in RFC 3339 (see
    /// [`is_rfc3339_encodable`]).
    pub fn new(date_time: time::OffsetDateTime) -> Result<Self> {
        tracing::trace!(?date_time, "DateTimeParameter::new");
        if !is_rfc3339_encodable(date_time) {
            return Err(Error::Invalid(
                "DateTimeParameter dateTime must have a year in 0..=9999 and a whole-minute offset",
            ));
        }
        Ok(Self { date_time })
    }
    pub fn date_time(&self) -> time::OffsetDateTime {
        self.date_time
    }
    pub fn parameter_type(&self) -> ParameterType {
        Self::PARAMETER_TYPE
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
struct DateTimeParameterJSON {
    #[serde(rename = "parameterType")]
    parameter_type: ParameterType,
    #[serde(rename = "dateTime", with = "time::serde::rfc3339")]
    date_time: time::OffsetDateTime,
}

impl From<DateTimeParameter> for DateTimeParameterJSON {
    fn from(date_time_parameter: DateTimeParameter) -> Self {
        Self {
            parameter_type: DateTimeParameter::PARAMETER_TYPE,
            date_time: date_time_parameter.date_time,
        }
    }
}

impl TryFrom<DateTimeParameterJSON> for DateTimeParameter {
    type Error = Error;
    fn try_from(
        date_time_parameter_json: DateTimeParameterJSON,
    ) -> std::result::Result<Self, Self::Error> {
        if date_time_parameter_json.parameter_type != DateTimeParameter::PARAMETER_TYPE {
            tracing::debug!(
                parameter_type = %date_time_parameter_json.parameter_type,
                "DateTimeParameter: rejecting mismatched parameterType"
            );
            return Err(Error::Malformed(
                "DateTimeParameter requires parameterType \"DateTimeParameter\"",
            ));
        }
        Ok(Self {
            date_time: date_time_parameter_json.date_time,
        })
    }
}
