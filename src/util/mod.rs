/// Date and time patterns in `yyyy-MM-dd HH:mm:ss` notation.
pub mod datetime;

#[cfg(feature = "digest")]
/// This module provides salted PBKDF2 password digests.
pub mod digest;

#[cfg(feature = "store")]
/// This module provides a string cache facade over a key-value store.
pub mod store;

#[cfg(feature = "result")]
/// This module provides a uniform response envelope.
pub mod result;
