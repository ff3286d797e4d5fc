use std::ops::RangeInclusive;

use rand::Rng;

use crate::shared::ASN;

// Public and private ASN blocks from the IANA 16-bit and 32-bit registries.
pub const ASN_RANGES: [RangeInclusive<ASN>; 7] = [
    1..=65551,
    131072..=151865,
    196608..=213403,
    262144..=273820,
    327680..=329727,
    393216..=401308,
    4200000000..=4294967294,
];

/// Picks one of the ranges uniformly, then an ASN uniformly inside it.
///
/// Small ranges are therefore as likely to be hit as the large private
/// 32-bit block.
pub fn random_asn<R: Rng + ?Sized>(rng: &mut R) -> ASN {
    let range = ASN_RANGES[rng.gen_range(0..ASN_RANGES.len())].clone();
    rng.gen_range(range)
}

pub fn is_in_asn_ranges(asn: ASN) -> bool {
    ASN_RANGES.iter().any(|range| range.contains(&asn))
}
