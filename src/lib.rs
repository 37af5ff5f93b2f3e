mod date_time_parameter;
mod did_parameter;
mod error;
mod parameter_type;
mod parameterizable_vc_verification;
mod vc_verification;
mod vc_verification_request;
mod vc_verification_response;
mod vc_verification_result;
mod verification_parameter;

pub use crate::{
    date_time_parameter::DateTimeParameter,
    did_parameter::DidParameter,
    error::Error,
    parameter_type::ParameterType,
    parameterizable_vc_verification::ParameterizableVcVerification,
    vc_verification::VcVerification,
    vc_verification_request::VcVerificationRequest,
    vc_verification_response::VcVerificationResponse,
    vc_verification_result::VcVerificationResult,
    verification_parameter::VerificationParameter,
};

pub type Result<T> = std::result::Result<T, Error>;

/// RFC 3339 can only represent years 0000 through 9999 and offsets with whole minutes, so these
/// are the only timestamps that can be carried in a `dateTime` field.
pub fn is_rfc3339_encodable(t: time::OffsetDateTime) -> bool {
    (0..=9999).contains(&t.year()) && t.offset().seconds_past_minute() == 0
}
