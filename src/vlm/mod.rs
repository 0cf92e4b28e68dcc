//! VLM client module for image description.
//!
//! This module handles the round trip to the upstream Vision-Language-Model
//! chat-completion endpoint: validating the inline image data URL, building
//! the request, and extracting the generated description from either a
//! buffered JSON response or an SSE-style line stream.
//!
//! # Submodules
//!
//! - `models`: Request/response data structures and placeholder texts.
//! - `validate`: Syntactic validation of `data:image/...;base64,` strings.
//! - `client`: Request construction and the HTTP round trip.
//! - `streaming`: Line-based accumulation of streamed response deltas.

pub mod client;
pub mod models;
pub mod streaming;
pub mod validate;

pub use client::VlmClient;
pub use validate::validate_image_data_url;
