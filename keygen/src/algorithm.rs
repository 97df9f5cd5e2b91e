use crate::KeyError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The key algorithms a peer identity can be generated for.
///
/// The textual names are case sensitive and match the libp2p key type names in upper case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyAlgorithm {
    Rsa,
    Ed25519,
    Secp256k1,
    Ecdsa,
}

impl KeyAlgorithm {
    pub const ALL: [KeyAlgorithm; 4] = [
        KeyAlgorithm::Rsa,
        KeyAlgorithm::Ed25519,
        KeyAlgorithm::Secp256k1,
        KeyAlgorithm::Ecdsa,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            KeyAlgorithm::Rsa => "RSA",
            KeyAlgorithm::Ed25519 => "ED25519",
            KeyAlgorithm::Secp256k1 => "SECP256K1",
            KeyAlgorithm::Ecdsa => "ECDSA",
        }
    }

    /// Whether the bit length influences generation; the other algorithms have a fixed size.
    pub fn uses_bits(self) -> bool {
        matches!(self, KeyAlgorithm::Rsa)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|a| a.as_str())
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyAlgorithm {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|a| a.as_str() == s).ok_or_else(|| {
            KeyError::InvalidInput(format!(
                "unsupported key type `{}`, expected one of {}",
                s,
                Self::names().collect::<Vec<_>>().join(", ")
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::KeyAlgorithm;
    use crate::KeyError;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;

    impl Arbitrary for KeyAlgorithm {
        fn arbitrary(g: &mut Gen) -> Self {
            *g.choose(&KeyAlgorithm::ALL).unwrap()
        }
    }

    #[quickcheck]
    fn str_roundtrip(algorithm: KeyAlgorithm) -> bool {
        algorithm.to_string().parse::<KeyAlgorithm>() == Ok(algorithm)
    }

    #[quickcheck]
    fn only_exact_names_parse(s: String) -> bool {
        match s.parse::<KeyAlgorithm>() {
            Ok(a) => a.as_str() == s,
            Err(KeyError::InvalidInput(_)) => !KeyAlgorithm::names().any(|n| n == s),
            Err(_) => false,
        }
    }

    #[test]
    fn names_are_case_exact() {
        assert_eq!("ED25519".parse::<KeyAlgorithm>().unwrap(), KeyAlgorithm::Ed25519);
        assert!("ed25519".parse::<KeyAlgorithm>().is_err());
        assert!("Rsa".parse::<KeyAlgorithm>().is_err());
        let err = "UNKNOWN".parse::<KeyAlgorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: unsupported key type `UNKNOWN`, expected one of RSA, ED25519, SECP256K1, ECDSA"
        );
    }

    #[test]
    fn serde_uses_external_names() {
        assert_eq!(serde_json::to_string(&KeyAlgorithm::Secp256k1).unwrap(), "\"SECP256K1\"");
        let a: KeyAlgorithm = serde_json::from_str("\"ECDSA\"").unwrap();
        assert_eq!(a, KeyAlgorithm::Ecdsa);
    }

    #[test]
    fn only_rsa_uses_bits() {
        let with_bits: Vec<_> = KeyAlgorithm::ALL.iter().filter(|a| a.uses_bits()).collect();
        assert_eq!(with_bits, vec![&KeyAlgorithm::Rsa]);
    }
}
