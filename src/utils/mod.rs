//! Internal helpers shared across the cipher and analysis modules.

pub(crate) mod letters;
