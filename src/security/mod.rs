//! Connection-ID secrets and request authentication.
//!
//! The UDP tracker protocol uses a 64-bit connection ID as a stateless
//! session cookie: a client must first obtain one via a connect request
//! before its announces and scrapes are accepted. This module derives
//! those cookies from the client endpoint and a rotating 16-byte secret,
//! so no per-client state is kept and a spoofed source address cannot
//! produce a valid cookie.
//!
//! A cookie is accepted under the current or the previous key, which makes
//! the rotation cadence the validity window: issued cookies survive
//! exactly one rotation.

/// Implementation blocks for the key rotator.
pub mod impls;

/// Cookie derivation and worker selection.
#[allow(clippy::module_inception)]
pub mod security;

/// Key pair and rotator structures.
pub mod structs;

/// Unit tests for cookie and rotation behavior.
pub mod tests;
