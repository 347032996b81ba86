/// Named field access and runtime type descriptors.
pub mod bean;

/// Process-wide cache of copy plans.
pub mod cache;

/// Value conversion between mismatched field kinds.
pub mod converter;

/// Plan-driven bean copier.
pub mod copier;

/// Compile-time mappers.
pub mod mapper;

/// Copy plans between two bean types.
pub mod plan;

/// Plan-less field copy.
pub mod reflect;

pub mod value;
