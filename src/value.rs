use crate::error::{Result, SensitiveValueError};
use log::trace;
use std::collections::BTreeMap;
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// An opaque holder for a sensitive byte sequence.
///
/// `SensitiveValue` keeps an owned, defensively copied buffer together with
/// two access flags that are fixed at construction:
///
/// - `allow_inline_access` gates the textual-cast path (`Display` and
///   [`to_display_string`](Self::to_display_string)).
/// - `allow_serialization` gates the serde `Serialize` path.
///
/// Neither flag affects [`value`](Self::value), which is the sanctioned,
/// unconditional read path, nor the `Debug` representation, which is always
/// redacted. On drop the buffer is zeroized.
///
/// A disallowed gated access fails with a [`SensitiveValueError`] rather than
/// degrading to empty output.
///
/// # Example
///
/// ```rust
/// use sensitivevalue::SensitiveValue;
///
/// let secret = SensitiveValue::locked(b"my-password");
///
/// // The explicit accessor always works and returns a fresh copy.
/// assert_eq!(&*secret.value(), b"my-password");
///
/// // The gated paths do not.
/// assert!(secret.to_display_string().is_err());
///
/// // Debug output is always redacted.
/// assert!(!format!("{:?}", secret).contains("my-password"));
/// ```
pub struct SensitiveValue {
    content: Vec<u8>,
    allow_inline_access: bool,
    allow_serialization: bool,
}

/// Copies `input` into a freshly allocated, independently owned buffer.
///
/// The element-wise copy guarantees the result shares no backing storage with
/// the source, so zeroizing either buffer cannot affect the other.
pub(crate) fn copy_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; input.len()];
    for (dst, src) in out.iter_mut().zip(input.iter()) {
        *dst = *src;
    }
    out
}

impl SensitiveValue {
    /// Creates a new `SensitiveValue` with explicit access flags.
    ///
    /// `value` is defensively copied before being stored; mutating the
    /// caller's buffer afterwards has no effect on the held content.
    ///
    /// Prefer one of the named factories ([`locked`](Self::locked),
    /// [`inlineable`](Self::inlineable), [`serializable`](Self::serializable),
    /// [`open`](Self::open)) unless an unusual flag combination is needed.
    pub fn new(value: &[u8], allow_inline_access: bool, allow_serialization: bool) -> Self {
        trace!("creating SensitiveValue with {} bytes", value.len());
        Self {
            content: copy_bytes(value),
            allow_inline_access,
            allow_serialization,
        }
    }

    /// Creates a value with both gated paths denied.
    ///
    /// This is the strictest policy and the recommended default: access is
    /// deny-by-default and only the explicit [`value`](Self::value) accessor
    /// reaches the content.
    pub fn locked(value: &[u8]) -> Self {
        Self::new(value, false, false)
    }

    /// Creates a value whose textual cast is allowed but serialization denied.
    pub fn inlineable(value: &[u8]) -> Self {
        Self::new(value, true, false)
    }

    /// Creates a value that may be serialized but not cast to text.
    pub fn serializable(value: &[u8]) -> Self {
        Self::new(value, false, true)
    }

    /// Creates a value with both gated paths allowed.
    pub fn open(value: &[u8]) -> Self {
        Self::new(value, true, true)
    }

    /// Returns a fresh defensive copy of the content.
    ///
    /// This is the sanctioned read path. It always succeeds regardless of the
    /// access flags and has no effect on the held buffer. The returned copy
    /// zeroizes itself when dropped.
    pub fn value(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(copy_bytes(&self.content))
    }

    /// Whether the textual-cast path is allowed for this value.
    pub fn allows_inline_access(&self) -> bool {
        self.allow_inline_access
    }

    /// Whether the serialization path is allowed for this value.
    pub fn allows_serialization(&self) -> bool {
        self.allow_serialization
    }

    /// Length of the held content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the held content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the content as text, if the inline-access flag permits it.
    ///
    /// The textual-cast path. `Display` routes through the same policy.
    ///
    /// # Errors
    ///
    /// [`SensitiveValueError::InlineAccessDenied`] when the value was
    /// constructed with `allow_inline_access` false.
    pub fn to_display_string(&self) -> Result<String> {
        if !self.allow_inline_access {
            return Err(SensitiveValueError::InlineAccessDenied);
        }
        let copy = Zeroizing::new(copy_bytes(&self.content));
        Ok(String::from_utf8_lossy(&copy).into_owned())
    }

    /// The fixed redaction rendered by `Debug`, irrespective of both flags.
    pub fn debug_representation() -> BTreeMap<&'static str, &'static str> {
        let mut map = BTreeMap::new();
        map.insert("content", "*");
        map.insert("notice", "call value() to access the content");
        map
    }

    pub(crate) fn content(&self) -> &[u8] {
        &self.content
    }
}

impl PartialEq for SensitiveValue {
    /// Constant-time content comparison; the access flags are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.content.ct_eq(&other.content).into()
    }
}

impl Eq for SensitiveValue {}

impl fmt::Display for SensitiveValue {
    /// The implicit textual-cast hook.
    ///
    /// Writes the content when inline access is allowed. A denied cast is the
    /// one misuse signal `fmt` can carry, so it surfaces as `fmt::Error`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_display_string() {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl fmt::Debug for SensitiveValue {
    /// Always renders the fixed redaction, never the content.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("SensitiveValue");
        for (key, val) in Self::debug_representation() {
            dbg.field(key, &val);
        }
        dbg.finish()
    }
}

impl Drop for SensitiveValue {
    /// Scrubs the content before the buffer is returned to the allocator.
    ///
    /// `zeroize` compiles to a fenced write that resists dead-store
    /// elimination. Runs on every exit path, including unwind.
    fn drop(&mut self) {
        trace!("zeroizing SensitiveValue of {} bytes", self.content.len());
        self.content.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_bytes_is_fresh_and_identical() {
        let src = b"abcdef".to_vec();
        let copy = copy_bytes(&src);
        assert_eq!(copy, src);
        assert_ne!(copy.as_ptr(), src.as_ptr());
    }

    #[test]
    fn copy_bytes_empty() {
        assert!(copy_bytes(b"").is_empty());
    }

    #[test]
    fn flags_are_fixed_per_factory() {
        let locked = SensitiveValue::locked(b"x");
        assert!(!locked.allows_inline_access());
        assert!(!locked.allows_serialization());

        let inlineable = SensitiveValue::inlineable(b"x");
        assert!(inlineable.allows_inline_access());
        assert!(!inlineable.allows_serialization());

        let serializable = SensitiveValue::serializable(b"x");
        assert!(!serializable.allows_inline_access());
        assert!(serializable.allows_serialization());

        let open = SensitiveValue::open(b"x");
        assert!(open.allows_inline_access());
        assert!(open.allows_serialization());
    }

    #[test]
    fn len_and_is_empty() {
        let v = SensitiveValue::locked(b"topsecret");
        assert_eq!(v.len(), 9);
        assert!(!v.is_empty());
        assert!(SensitiveValue::locked(b"").is_empty());
    }
}
