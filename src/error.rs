/// Exit code for missing configuration or an unreadable/unwritable table.
pub const EXIT_RESOURCE: u8 = 2;
/// Exit code for a malformed input row.
pub const EXIT_FORMAT: u8 = 3;
/// Exit code for a failed outbound request on a path that does not degrade.
pub const EXIT_TRANSPORT: u8 = 4;
/// Exit code for an undecodable response body.
pub const EXIT_PARSE: u8 = 5;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn resource(message: impl Into<String>) -> Self {
        Self::new(EXIT_RESOURCE, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(EXIT_FORMAT, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(EXIT_TRANSPORT, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(EXIT_PARSE, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
