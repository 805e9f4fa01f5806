use std::sync::atomic::{AtomicUsize, Ordering};

use num_bigint::BigUint;
use num_traits::{Num, One};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::params::{
    RFC3526_2048_G, RFC3526_2048_P, RFC3526_3072_G, RFC3526_3072_P, RFC3526_4096_G,
    RFC3526_4096_P,
};
use crate::strength::StrengthClass;

/// A Diffie-Hellman group: a safe prime modulus and its generator.
///
/// Values returned by the accessors own their storage. Mutating one never
/// affects the canonical cache or any other returned group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub modulus: BigUint,
    pub generator: BigUint,
}

impl Group {
    /// Copy of the canonical group for `strength`.
    pub fn from_strength(strength: StrengthClass) -> Self {
        canonical_copy(strength)
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Order of the prime-order subgroup, q = (p - 1) / 2.
    pub fn order(&self) -> BigUint {
        (&self.modulus - BigUint::one()) / 2u32
    }

    pub fn modulus_hex(&self) -> String {
        hex::encode_upper(self.modulus.to_bytes_be())
    }

    pub fn generator_hex(&self) -> String {
        hex::encode_upper(self.generator.to_bytes_be())
    }

    /// SHA-256 over the big-endian modulus bytes followed by the generator bytes.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.modulus.to_bytes_be());
        hasher.update(self.generator.to_bytes_be());
        hex::encode(hasher.finalize())
    }
}

// Parsed once, read-only afterwards. Only ever handed out by clone.
struct CanonicalGroups {
    modp2048: Group,
    modp3072: Group,
    modp4096: Group,
}

impl CanonicalGroups {
    fn get(&self, strength: StrengthClass) -> &Group {
        match strength {
            StrengthClass::Modp2048 => &self.modp2048,
            StrengthClass::Modp3072 => &self.modp3072,
            StrengthClass::Modp4096 => &self.modp4096,
        }
    }
}

static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

// All three classes are built together on the first call to any accessor.
static CANONICAL: Lazy<CanonicalGroups> = Lazy::new(|| {
    INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);

    let groups = CanonicalGroups {
        modp2048: parse_group(StrengthClass::Modp2048, RFC3526_2048_G, RFC3526_2048_P),
        modp3072: parse_group(StrengthClass::Modp3072, RFC3526_3072_G, RFC3526_3072_P),
        modp4096: parse_group(StrengthClass::Modp4096, RFC3526_4096_G, RFC3526_4096_P),
    };

    for strength in StrengthClass::ALL {
        let group = groups.get(strength);
        debug!(
            %strength,
            bits = group.bits(),
            fingerprint = %group.fingerprint(),
            "canonical DH group ready"
        );
    }
    groups
});

fn parse_group(strength: StrengthClass, generator: &str, modulus: &str) -> Group {
    Group {
        modulus: parse_literal(strength, "modulus", modulus),
        generator: parse_literal(strength, "generator", generator),
    }
}

// A malformed literal means the constant table itself is corrupt.
fn parse_literal(strength: StrengthClass, field: &str, literal: &str) -> BigUint {
    BigUint::from_str_radix(literal, 16)
        .unwrap_or_else(|e| panic!("canonical {field} for {strength} is not valid hex: {e}"))
}

fn canonical_copy(strength: StrengthClass) -> Group {
    let group = CANONICAL.get(strength).clone();
    trace!(%strength, "handing out copy of canonical DH group");
    group
}

/// The 2048-bit MODP group of RFC 3526 (section 3).
pub fn rfc3526_2048() -> Group {
    canonical_copy(StrengthClass::Modp2048)
}

/// The 3072-bit MODP group of RFC 3526 (section 4).
pub fn rfc3526_3072() -> Group {
    canonical_copy(StrengthClass::Modp3072)
}

/// The 4096-bit MODP group of RFC 3526 (section 5).
pub fn rfc3526_4096() -> Group {
    canonical_copy(StrengthClass::Modp4096)
}

/// How many times the canonical cache has been built in this process.
///
/// Zero until the first accessor call, one forever after.
pub fn initialization_count() -> usize {
    INITIALIZATIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modp2048_matches_reference() {
        let group = rfc3526_2048();
        let hex = group.modulus_hex();
        assert_eq!(group.bits(), 2048);
        assert_eq!(group.generator, BigUint::from(2u32));
        assert!(hex.starts_with(
            "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74"
        ));
        assert!(hex.ends_with("AACAA68FFFFFFFFFFFFFFFF"));
        assert_eq!(hex, RFC3526_2048_P);
    }

    #[test]
    fn every_class_has_its_bit_length() {
        for strength in StrengthClass::ALL {
            let group = Group::from_strength(strength);
            assert_eq!(group.bits(), strength.bits());
            assert_eq!(group.generator, BigUint::from(2u32));
            assert_eq!(group.generator_hex(), "02");
        }
        assert_eq!(rfc3526_3072().modulus_hex(), RFC3526_3072_P);
        assert_eq!(rfc3526_4096().modulus_hex(), RFC3526_4096_P);
    }

    #[test]
    fn moduli_are_distinct() {
        let a = rfc3526_2048().modulus;
        let b = rfc3526_3072().modulus;
        let c = rfc3526_4096().modulus;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn copies_do_not_share_storage() {
        let mut first = rfc3526_2048();
        let second = rfc3526_2048();
        assert_eq!(first, second);

        first.modulus += 1u32;
        first.generator = BigUint::from(5u32);

        assert_ne!(first, second);
        assert_eq!(second.generator, BigUint::from(2u32));
        assert_eq!(second.modulus_hex(), RFC3526_2048_P);
        assert_eq!(rfc3526_2048(), second);
    }

    #[test]
    fn order_is_half_of_p_minus_one() {
        let group = rfc3526_3072();
        let q = group.order();
        assert_eq!(q * 2u32 + 1u32, group.modulus);
    }

    #[test]
    fn fingerprints_are_stable() {
        assert_eq!(
            rfc3526_2048().fingerprint(),
            "f3253b3139b8a3f08f8a10e4ad301681db4dc91c72cffc843bddf4f07de9bd4c"
        );
        assert_eq!(
            rfc3526_3072().fingerprint(),
            "dde5e0a319d90762f48931c4025aacca8b498c16223207cac98c204b60f03a81"
        );
        assert_eq!(
            rfc3526_4096().fingerprint(),
            "0e24ae1ce382c7a941bb58309a9dfc16cb5f9f3366a293da919edcce6f7ad3c4"
        );
    }

    #[test]
    fn cache_is_built_once() {
        for _ in 0..10 {
            rfc3526_4096();
            rfc3526_2048();
            rfc3526_3072();
        }
        assert_eq!(initialization_count(), 1);
    }

    #[test]
    #[should_panic(expected = "not valid hex")]
    fn malformed_literal_is_fatal() {
        parse_literal(StrengthClass::Modp2048, "modulus", "FFZZ");
    }
}
