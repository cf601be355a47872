//! Stencil Core Types and Definitions
//!
//! This crate provides the foundational types for the Stencil code
//! generator. It includes:
//!
//! - **Model**: The typed model tree handed to renderers ([`model`] module)
//! - **Fragments**: Possibly-absent rendered text ([`fragment::Fragment`])
//! - **Combinators**: Absence-aware joining of fragments ([`combine`] module)
//! - **Formatting**: Indentation and separator primitives ([`format`] module)
//! - **Errors**: Failures raised while rendering ([`error::RenderError`])

pub mod combine;
pub mod error;
pub mod format;
pub mod fragment;
pub mod model;

pub use error::RenderError;
pub use fragment::Fragment;
