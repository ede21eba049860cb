use tracing::debug;

use crate::Line;

use super::errors::{Error, ErrorImpl};

/// Collects the errors reported during one parse.
///
/// Reporting never stops the parse; rules decide for themselves whether to
/// keep descending. A parse is only successful if nothing was reported.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<Error>,
    echo: bool,
}

impl ErrorReporter {
    /// `echo` prints each diagnostic to stdout as `<line>: <message>` the
    /// moment it is reported.
    pub fn new(echo: bool) -> Self {
        ErrorReporter {
            errors: vec![],
            echo,
        }
    }

    pub fn report(&mut self, line: Line, error_impl: ErrorImpl) {
        let error = Error::new(error_impl, line);
        debug!(line, error = error.get_error_name(), "parse error reported");

        if self.echo {
            println!("{}", error);
        }

        self.errors.push(error);
    }

    pub fn count(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }
}
