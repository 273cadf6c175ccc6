use crate::report::ReportError;
use crate::turn::EngineError;
use derive_more::with_trait::Display;
use std::error::Error;
use std::fmt::Debug;

/// The reason why a turn failed.
#[derive(Debug, Display, Clone, Eq, PartialEq)]
pub enum TurnError<E> {
    #[display("engine failure, {_0}")]
    Engine(EngineError),
    #[display("failed to report, {_0}")]
    Report(ReportError),
    #[display("failed to write output")]
    Output(E),
}

impl<E> From<EngineError> for TurnError<E> {
    fn from(e: EngineError) -> Self {
        TurnError::Engine(e)
    }
}

impl<E> From<ReportError> for TurnError<E> {
    fn from(e: ReportError) -> Self {
        TurnError::Report(e)
    }
}

impl<E: Debug> Error for TurnError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TurnError::Engine(e) => Some(e),
            TurnError::Report(e) => Some(e),
            TurnError::Output(_) => None,
        }
    }
}
