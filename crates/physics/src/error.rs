use thiserror::Error;

/// Invalid physics constants, rejected when a simulation is constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("`{name}` must be {requirement}, found {value}")]
    OutOfRange {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },
}

impl ConfigError {
    pub fn out_of_range(name: &'static str, requirement: &'static str, value: f64) -> Self {
        ConfigError::OutOfRange {
            name,
            requirement,
            value,
        }
    }
}
