//! Live display surfaces and the watch hardware they model.

pub(crate) mod platform;
pub(crate) mod surface;
