use thiserror::Error;

use crate::catalog::types::TestDescriptor;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz engine is not implemented")]
    NotImplemented,
}

/// Runs quiz sessions for the Tests view.
///
/// The view lists descriptors and routes "start" through this seam. The
/// shipped engine answers every start with [`QuizError::NotImplemented`]; a
/// real engine replaces it without touching the state model or the view.
pub trait QuizEngine {
    fn start(&self, test: &TestDescriptor) -> Result<(), QuizError>;
}

pub struct StubQuizEngine;

impl QuizEngine for StubQuizEngine {
    fn start(&self, _test: &TestDescriptor) -> Result<(), QuizError> {
        Err(QuizError::NotImplemented)
    }
}
