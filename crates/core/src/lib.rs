//! Pure domain logic shared by the rendering pipeline and the API.
//!
//! This crate has no I/O and no async: filename derivation, guest-list
//! parsing, CSV escaping, and the job model all live here so they can be
//! tested without a runtime or a filesystem.

pub mod error;
pub mod guest_list;
pub mod job;
pub mod naming;
