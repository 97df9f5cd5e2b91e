use crate::{
    encoded::EncodedKeyPair, identity::PeerIdentity, private::PrivateKey, public::PublicKey, KeyAlgorithm, KeyError,
    Result,
};
use std::fmt::{self, Debug};

/// A freshly generated key pair together with its peer identity.
///
/// The value is immutable: there is no way to swap out material or identity after
/// [`KeyPair::generate`] returned it.
#[derive(Clone)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
    identity: PeerIdentity,
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public == other.public
    }
}
impl Eq for KeyPair {}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("algorithm", &self.algorithm())
            .field("peer_id", &self.identity.peer_id())
            .finish()
    }
}

impl KeyPair {
    /// Generate a new key pair of the given algorithm.
    ///
    /// `bits` must be at least 1 for RSA, it is ignored by the fixed-size algorithms. Every call
    /// draws fresh randomness, so two calls never return the same key.
    pub fn generate(algorithm: KeyAlgorithm, bits: i64) -> Result<Self> {
        if algorithm.uses_bits() && bits < 1 {
            return Err(KeyError::InvalidInput(format!(
                "{} keys need a positive bit count, got {}",
                algorithm, bits
            )));
        }
        let (private, public) = PrivateKey::generate(algorithm, bits)?;
        let identity = PeerIdentity::from_public_key(&public)?;
        tracing::debug!(%algorithm, bits, peer_id = %identity, "generated key pair");
        Ok(Self {
            private,
            public,
            identity,
        })
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.public.algorithm()
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn identity(&self) -> PeerIdentity {
        self.identity
    }

    /// Render all outputs in their textual form.
    pub fn encode(&self) -> EncodedKeyPair {
        EncodedKeyPair {
            private: self.private.to_string(),
            public: self.public.to_string(),
            peer_id: self.identity.to_string(),
            content_id: self.identity.content_id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KeyPair;
    use crate::{KeyAlgorithm, KeyError, PeerIdentity, PublicKey};
    use quickcheck_macros::quickcheck;
    use std::thread;

    fn bits_for(algorithm: KeyAlgorithm) -> i64 {
        if algorithm.uses_bits() {
            2048
        } else {
            0
        }
    }

    #[test]
    fn all_algorithms_produce_outputs() {
        for algorithm in KeyAlgorithm::ALL {
            let pair = KeyPair::generate(algorithm, bits_for(algorithm)).unwrap();
            assert_eq!(pair.algorithm(), algorithm);
            let encoded = pair.encode();
            assert!(!encoded.private.is_empty());
            assert!(!encoded.public.is_empty());
            assert!(!encoded.peer_id.is_empty());
            assert!(!encoded.content_id.is_empty());
        }
    }

    #[test]
    fn identity_follows_from_public_key_alone() {
        for algorithm in KeyAlgorithm::ALL {
            let encoded = KeyPair::generate(algorithm, bits_for(algorithm)).unwrap().encode();
            let public = PublicKey::from_base64(algorithm, &encoded.public).unwrap();
            let identity = PeerIdentity::from_public_key(&public).unwrap();
            assert_eq!(identity.to_string(), encoded.peer_id);
            assert_eq!(identity.content_id().to_string(), encoded.content_id);
            let from_cid = PeerIdentity::from_content_id(&encoded.content_id).unwrap();
            assert_eq!(from_cid.to_string(), encoded.peer_id);
        }
    }

    #[test]
    fn every_call_is_fresh() {
        for algorithm in KeyAlgorithm::ALL {
            let a = KeyPair::generate(algorithm, bits_for(algorithm)).unwrap().encode();
            let b = KeyPair::generate(algorithm, bits_for(algorithm)).unwrap().encode();
            assert_ne!(a.private, b.private);
            assert_ne!(a.public, b.public);
            assert_ne!(a.peer_id, b.peer_id);
        }
    }

    #[test]
    fn encode_is_deterministic() {
        for algorithm in KeyAlgorithm::ALL {
            let pair = KeyPair::generate(algorithm, bits_for(algorithm)).unwrap();
            assert_eq!(pair.encode(), pair.encode());
        }
    }

    #[test]
    fn rsa_needs_positive_bits() {
        for bits in [0, -1, -2048] {
            let err = KeyPair::generate(KeyAlgorithm::Rsa, bits).unwrap_err();
            assert!(matches!(err, KeyError::InvalidInput(_)), "{}", err);
        }
    }

    #[test]
    fn rsa_2048_private_key_size() {
        let encoded = KeyPair::generate(KeyAlgorithm::Rsa, 2048).unwrap().encode();
        let private = encoded.decode_private().unwrap();
        // PKCS#1 DER of a 2048 bit key: 4 bytes header plus nine integers, ~1190 bytes
        assert!((1180..=1200).contains(&private.len()), "{}", private.len());
    }

    #[test]
    fn ed25519_raw_sizes() {
        let encoded = KeyPair::generate(KeyAlgorithm::Ed25519, 0).unwrap().encode();
        assert_eq!(encoded.decode_private().unwrap().len(), 64);
        assert_eq!(encoded.decode_public().unwrap().len(), 32);
    }

    #[quickcheck]
    fn fixed_size_algorithms_ignore_bits(bits: i64) -> bool {
        [KeyAlgorithm::Ed25519, KeyAlgorithm::Secp256k1, KeyAlgorithm::Ecdsa]
            .iter()
            .all(|a| KeyPair::generate(*a, bits).is_ok())
    }

    #[test]
    fn parallel_generation() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let algorithm = KeyAlgorithm::ALL[1 + i % 3];
                thread::spawn(move || KeyPair::generate(algorithm, 0).unwrap().encode().peer_id)
            })
            .collect();
        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn debug_omits_material() {
        let pair = KeyPair::generate(KeyAlgorithm::Ed25519, 0).unwrap();
        let debug = format!("{:?}", pair);
        assert!(!debug.contains(&pair.encode().private));
        assert!(!debug.contains(&pair.encode().public));
    }
}
