use crate::Error;

/// Discriminator carried in the `parameterType` field of every verification parameter.
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
pub enum ParameterType {
    DidParameter,
    DateTimeParameter,
}

impl ParameterType {
    pub const VARIANTS: [ParameterType; 2] =
        [ParameterType::DidParameter, ParameterType::DateTimeParameter];
    /// The literal tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::DidParameter => "DidParameter",
            ParameterType::DateTimeParameter => "DateTimeParameter",
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ParameterType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DidParameter" => Ok(ParameterType::DidParameter),
            "DateTimeParameter" => Ok(ParameterType::DateTimeParameter),
            _ => Err(Error::Unrecognized("parameterType")),
        }
    }
}
