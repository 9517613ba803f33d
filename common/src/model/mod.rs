//! Records shared by the review service and anything that talks to it.

pub mod dealership;
pub mod review;
