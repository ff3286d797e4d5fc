pub mod as_path_generator;
pub mod asn_ranges;

pub use as_path_generator::{ASPath, ASPathGenerator, ASPathPool};
pub use asn_ranges::{is_in_asn_ranges, random_asn, ASN_RANGES};
