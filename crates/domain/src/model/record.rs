/// One successfully parsed log line.
///
/// Records are only produced by [`crate::parser::parse_line`] and never
/// mutated afterwards, so every field is read through an accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: String,
    severity: String,
    module: String,
    function: String,
    line_number: i16,
    message: String,
}

impl LogRecord {
    pub(crate) fn new(
        timestamp: &str,
        severity: &str,
        module: &str,
        function: &str,
        line_number: i16,
        message: &str,
    ) -> Self {
        Self {
            timestamp: timestamp.to_owned(),
            severity: severity.to_owned(),
            module: module.to_owned(),
            function: function.to_owned(),
            line_number,
            message: message.to_owned(),
        }
    }

    /// Raw timestamp text; its layout is only checked at summary time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Severity token as written, including unrecognised ones.
    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source line reported by the emitting application.
    pub fn line_number(&self) -> i16 {
        self.line_number
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
