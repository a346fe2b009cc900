use cosmwasm_std::StdError;
use error_stack::Report;
use report::LoggableError;
use thiserror::Error;

/// Error type returned by all contract entry points.
#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error(transparent)]
    Structured(#[from] LoggableError),
}

impl<T> From<Report<T>> for ContractError {
    fn from(report: Report<T>) -> Self {
        ContractError::Structured(LoggableError::from(&report))
    }
}

impl ContractError {
    /// Returns true if the error, or any error in its cause chain, renders as `msg`.
    pub fn contains(&self, msg: &str) -> bool {
        match self {
            ContractError::Std(err) => err.to_string() == msg,
            ContractError::Structured(err) => err.contains(msg),
        }
    }
}

/// Asserts that a `Result<_, Report<_>>` failed with an error of the given type matching the pattern.
#[macro_export]
macro_rules! assert_err_contains {
    ($expression:expr, $error_type:ty, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match $expression {
            Err(ref report) => {
                let matched = report
                    .frames()
                    .filter_map(|frame| frame.downcast_ref::<$error_type>())
                    .any(|err| matches!(err, $pattern $(if $guard)?));

                assert!(
                    matched,
                    "expected an error matching {}, got: {:?}",
                    stringify!($pattern),
                    report
                );
            }
            Ok(_) => panic!("expected an error, got Ok"),
        }
    };
}

/// Asserts that a contract entry point failed, and that the cause chain contains the given error.
#[macro_export]
macro_rules! assert_contract_err_contains {
    ($expression:expr, $error:expr $(,)?) => {
        match $expression {
            Err(ref err) => {
                let expected = $error.to_string();
                assert!(
                    $crate::error::ContractError::contains(err, &expected),
                    "expected the error chain to contain '{}', got: {}",
                    expected,
                    err
                );
            }
            Ok(_) => panic!("expected an error, got Ok"),
        }
    };
}
