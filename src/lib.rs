//! Derivation core for a shared-lunch logging application.
//!
//! Groups record lunches at locations and members rate them on a 0-10
//! quarter-point scale. This crate owns the logic that is more than a
//! pass-through query: group and per-user statistics derived from the
//! score graph, and per-request permission resolution. Persistence,
//! routing, and rendering live in the surrounding application; every
//! function here consumes a pre-joined in-memory snapshot and returns a
//! plain record.

pub mod groups;
