//! Framebuffers in the display's native pixel encodings.
//!
//! Format branching happens once per operation through static dispatch; the inner pixel loops
//! are monomorphized per format.

pub(crate) mod draw;
pub(crate) mod format;
pub(crate) mod framebuffer;
pub(crate) mod region;
