use std::error::Error;
use std::fmt::{Display, Formatter};
use std::mem;

use error_stack::{AttachmentKind, FrameKind, Report};
use itertools::Itertools;

/// Flattened view of an error-stack report: one layer per context, outermost first.
///
/// Contracts cannot hand a `Report` to the host chain, so the chain of contexts and
/// their printable attachments is captured here and rendered as a single message.
#[derive(PartialEq, Eq, Debug, Default, Clone)]
pub struct LoggableError {
    pub msg: String,
    pub attachments: Vec<String>,
    pub cause: Option<Box<LoggableError>>,
}

impl LoggableError {
    /// Iterates over this error and all of its causes, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &LoggableError> {
        std::iter::successors(Some(self), |err| err.cause.as_deref())
    }

    /// Returns true if any layer of the chain carries exactly this message.
    pub fn contains(&self, msg: &str) -> bool {
        self.chain().any(|err| err.msg == msg)
    }

    pub fn root_cause(&self) -> &LoggableError {
        self.chain().last().unwrap_or(self)
    }
}

impl Display for LoggableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)?;

        if !self.attachments.is_empty() {
            write!(f, " ({})", self.attachments.iter().join(", "))?;
        }

        match &self.cause {
            Some(cause) => write!(f, ": {}", cause),
            None => Ok(()),
        }
    }
}

impl Error for LoggableError {}

impl<T> From<&Report<T>> for LoggableError {
    fn from(report: &Report<T>) -> Self {
        // frames are yielded outermost first, with each context preceded by its own attachments
        let mut layers = Vec::new();
        let mut attachments = Vec::new();

        for frame in report.frames() {
            match frame.kind() {
                FrameKind::Context(context) => {
                    attachments.reverse();
                    layers.push(LoggableError {
                        msg: context.to_string(),
                        attachments: mem::take(&mut attachments),
                        cause: None,
                    });
                }
                FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                    attachments.push(printable.to_string())
                }
                // locations, backtraces and other opaque attachments carry no message
                FrameKind::Attachment(_) => {}
            }
        }

        layers
            .into_iter()
            .rev()
            .fold(None, |cause, mut layer: LoggableError| {
                layer.cause = cause.map(Box::new);
                Some(layer)
            })
            .unwrap_or_default()
    }
}
