use super::Error;

/// Error when a field value does not fit the type its column declares, in
/// either direction: a caller-supplied value of the wrong variant, or a wire
/// value the declared type cannot parse.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    message: Box<str>,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "type conversion failed: {}", self.message)
    }
}

impl Error {
    /// Creates a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
