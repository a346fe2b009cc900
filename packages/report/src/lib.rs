mod loggable;

pub use crate::loggable::LoggableError;
