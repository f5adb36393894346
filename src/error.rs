use thiserror::Error;

/// Errors that can occur when accessing a [`SensitiveValue`](crate::SensitiveValue).
///
/// Both variants signal caller misuse: an attempt to route secret content
/// through a convenience path that the value's construction policy forbids.
/// The sanctioned read path, [`SensitiveValue::value`](crate::SensitiveValue::value),
/// never fails.
///
/// # Examples
///
/// ```rust
/// use sensitivevalue::{SensitiveValue, SensitiveValueError};
///
/// let secret = SensitiveValue::locked(b"hunter2");
/// let err = secret.to_display_string().unwrap_err();
/// assert!(matches!(err, SensitiveValueError::InlineAccessDenied));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensitiveValueError {
    /// A textual cast was attempted on a value constructed without inline access.
    ///
    /// Raised by [`SensitiveValue::to_display_string`](crate::SensitiveValue::to_display_string)
    /// and by the `Display` implementation when `allow_inline_access` is false.
    #[error("inline access denied: call value() to access the content")]
    InlineAccessDenied,

    /// Serialization was attempted on a value constructed without serialization rights.
    ///
    /// Raised by the `Serialize` implementation when `allow_serialization` is
    /// false. The serializer never observes the content in this case.
    #[error("serialization denied: value was not constructed as serializable")]
    SerializationDenied,
}

/// Result type for gated `SensitiveValue` operations.
pub type Result<T> = std::result::Result<T, SensitiveValueError>;
