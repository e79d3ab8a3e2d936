use thiserror::Error;

use crate::{body::Body, rise_set::EventType};

#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("No orbital model registered for body: {0}")]
    UnknownBody(Body),

    #[error("{body} never crosses the horizon, no {event} from this location")]
    Circumpolar { body: String, event: EventType },

    #[error("Rise/set search did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid sexagesimal angle: {0}")]
    InvalidAngle(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ROOTS finding error: {0}")]
    RootFindingError(#[from] roots::SearchError),
}

impl From<hifitime::HifitimeError> for EphemerisError {
    fn from(err: hifitime::HifitimeError) -> Self {
        EphemerisError::InvalidDate(err.to_string())
    }
}

impl PartialEq for EphemerisError {
    fn eq(&self, other: &Self) -> bool {
        use EphemerisError::*;
        match (self, other) {
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (
                Circumpolar {
                    body: a,
                    event: ea,
                },
                Circumpolar {
                    body: b,
                    event: eb,
                },
            ) => a == b && ea == eb,
            (NotConverged { iterations: a }, NotConverged { iterations: b }) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidAngle(a), InvalidAngle(b)) => a == b,
            (InvalidConfig(a), InvalidConfig(b)) => a == b,
            (RootFindingError(a), RootFindingError(b)) => a == b,
            _ => false,
        }
    }
}
