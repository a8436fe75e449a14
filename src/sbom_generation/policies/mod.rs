mod reproducible_ordering;

pub use reproducible_ordering::ReproducibleOrdering;
