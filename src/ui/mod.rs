//! Console presentation of descriptors, plans and reports

pub mod display;
