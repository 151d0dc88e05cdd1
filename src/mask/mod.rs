pub(crate) mod staircase;
