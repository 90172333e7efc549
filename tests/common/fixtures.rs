/// One well-formed log line.
pub fn log_line(timestamp: &str, severity: &str, message: &str) -> String {
    format!("{timestamp} | {severity} | app.module: handler: 42 - {message}")
}

/// File A of the two-file scenario.
#[allow(dead_code)]
pub fn file_a() -> String {
    [
        log_line("2024-01-02 10:00:00.000", "INFO", "User logged in"),
        log_line("2024-01-02 10:05:00.000", "ERROR", "Database error"),
    ]
    .join("\n")
}

/// File B of the two-file scenario.
#[allow(dead_code)]
pub fn file_b() -> String {
    [
        log_line("2024-01-01 23:00:00.000", "WARNING", "Low memory"),
        log_line("2024-01-02 11:00:00.000", "ERROR", "Database error"),
    ]
    .join("\n")
}
