//! # Sensitive Value
//!
//! A minimal wrapper for sensitive byte sequences (passwords, keys, plaintext)
//! that reduces the chance of accidental disclosure through logs, debug dumps,
//! or serialized state.
//!
//! The library provides a single type, [`SensitiveValue`], which holds a
//! defensive copy of the original bytes together with two access flags fixed
//! at construction:
//!
//! - **Inline access** gates whether a textual cast (`Display`) yields the
//!   content.
//! - **Serialization** gates whether the serde `Serialize` hook persists the
//!   content.
//!
//! Independent of both flags:
//!
//! - [`SensitiveValue::value`] always returns a fresh, self-zeroizing copy of
//!   the content (the sanctioned read path).
//! - `Debug` output is always a fixed redaction, never the content.
//! - Equality is compared in constant time so secret content cannot be probed
//!   through timing.
//! - On drop, the held buffer is actively zeroized.
//!
//! Access is deny-by-default: the recommended factory is
//! [`SensitiveValue::locked`], and a disallowed gated access fails with a
//! [`SensitiveValueError`] rather than silently degrading.
//!
//! ## Basic Usage
//!
//! ```rust
//! use sensitivevalue::SensitiveValue;
//!
//! let secret = SensitiveValue::locked(b"correct horse battery staple");
//!
//! // Explicit access always works and returns a fresh copy.
//! assert_eq!(&*secret.value(), b"correct horse battery staple");
//!
//! // Casting to text is denied by this policy.
//! assert!(secret.to_display_string().is_err());
//!
//! // Debug never shows the content.
//! assert!(!format!("{:?}", secret).contains("horse"));
//! ```
//!
//! ## Serialization
//!
//! ```rust
//! use sensitivevalue::SensitiveValue;
//!
//! let secret = SensitiveValue::serializable(b"api-token");
//! let json = serde_json::to_string(&secret).unwrap();
//! let restored: SensitiveValue = serde_json::from_str(&json).unwrap();
//! assert_eq!(secret, restored);
//!
//! // A locked value refuses to serialize at all.
//! let locked = SensitiveValue::locked(b"api-token");
//! assert!(serde_json::to_string(&locked).is_err());
//! ```
//!
//! ## What this is not
//!
//! This is not a secure-memory allocator: it does not lock pages, guard
//! against swapping, or defend against a debugger attached to the process.
//! The drop-time scrub is best-effort. The goal is to degrade
//! convenience-driven accidental disclosure, nothing stronger.

/// The sensitive value holder and its access policy
pub mod value;

/// Error types
pub mod error;

/// Serde hooks gating the serialization path
mod serde;

// Re-export key types
pub use crate::error::{Result, SensitiveValueError};
pub use crate::value::SensitiveValue;
