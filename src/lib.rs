//! Content-type resolution for static web assets.
//!
//! Given a relative asset path produced by a build pipeline, determines the
//! MIME type to record for it using a built-in pattern table plus
//! caller-supplied overrides, with special handling for pre-compressed
//! variants (`.gz`, `.br`).

pub mod config;
pub mod logger;
pub mod manifest;
pub mod matcher;
pub mod mime;
pub mod resolver;

pub use matcher::MatchProbe;
pub use mime::ContentTypeMapping;
pub use resolver::{ContentTypeResolver, ResolveError};
