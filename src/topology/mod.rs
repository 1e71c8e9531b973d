//! Face and edge reconstruction from the flat index arrays.

pub(crate) mod edges;
pub(crate) mod faces;
pub(crate) mod steps;
pub(crate) mod winding;
