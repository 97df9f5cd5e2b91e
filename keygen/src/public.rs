use crate::{KeyAlgorithm, KeyError, Result};
use libp2p_identity::{ecdsa, ed25519, rsa, secp256k1, PeerId};
use p256::{elliptic_curve::sec1::ToEncodedPoint, pkcs8::DecodePublicKey};
use std::fmt::{self, Debug, Display};

/// A public key in its raw encoding, tagged with its algorithm
///
/// Construction always goes through libp2p's decoder, so every `PublicKey` value is known to
/// convert into a [`libp2p_identity::PublicKey`] and thereby into a [`PeerId`].
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    algorithm: KeyAlgorithm,
    raw: Vec<u8>,
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base64::encode(&self.raw))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_peer_id() {
            Ok(peer_id) => write!(f, "{}({})", self.algorithm, peer_id),
            Err(_) => write!(f, "{}(<invalid>)", self.algorithm),
        }
    }
}

impl PublicKey {
    pub fn from_bytes(algorithm: KeyAlgorithm, bytes: &[u8]) -> Result<Self> {
        let key = Self {
            algorithm,
            raw: bytes.to_vec(),
        };
        key.to_libp2p()?;
        Ok(key)
    }

    /// Decode a standard base64 string as produced by [`Display`].
    pub fn from_base64(algorithm: KeyAlgorithm, b64: &str) -> Result<Self> {
        let bytes = base64::decode(b64).map_err(|e| KeyError::encoding("public key base64", e))?;
        Self::from_bytes(algorithm, &bytes)
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    pub fn to_libp2p(&self) -> Result<libp2p_identity::PublicKey> {
        let bytes = &self.raw[..];
        let key = match self.algorithm {
            KeyAlgorithm::Rsa => rsa::PublicKey::try_decode_x509(bytes)
                .map(Into::into)
                .map_err(|e| KeyError::encoding("rsa public key", e))?,
            KeyAlgorithm::Ed25519 => ed25519::PublicKey::try_from_bytes(bytes)
                .map(Into::into)
                .map_err(|e| KeyError::encoding("ed25519 public key", e))?,
            KeyAlgorithm::Secp256k1 => secp256k1::PublicKey::try_from_bytes(bytes)
                .map(Into::into)
                .map_err(|e| KeyError::encoding("secp256k1 public key", e))?,
            KeyAlgorithm::Ecdsa => {
                // libp2p takes the bare point, the raw form is the SubjectPublicKeyInfo around it
                let spki = p256::PublicKey::from_public_key_der(bytes)
                    .map_err(|e| KeyError::encoding("ecdsa public key", e))?;
                ecdsa::PublicKey::try_from_bytes(spki.to_encoded_point(false).as_bytes())
                    .map(Into::into)
                    .map_err(|e| KeyError::encoding("ecdsa public key", e))?
            }
        };
        Ok(key)
    }

    pub fn to_peer_id(&self) -> Result<PeerId> {
        Ok(self.to_libp2p()?.to_peer_id())
    }
}

#[cfg(test)]
mod tests {
    use super::PublicKey;
    use crate::{KeyAlgorithm, KeyError, PrivateKey};

    #[test]
    fn base64_roundtrip() {
        for algorithm in KeyAlgorithm::ALL {
            let bits = if algorithm.uses_bits() { 2048 } else { 0 };
            let (_, public) = PrivateKey::generate(algorithm, bits).unwrap();
            let parsed = PublicKey::from_base64(algorithm, &public.to_string()).unwrap();
            assert_eq!(parsed, public);
        }
    }

    #[test]
    fn rejects_garbage() {
        for algorithm in KeyAlgorithm::ALL {
            let err = PublicKey::from_bytes(algorithm, &[1, 2, 3]).unwrap_err();
            assert!(matches!(err, KeyError::Encoding(_)), "{}: {}", algorithm, err);
        }
        assert!(matches!(
            PublicKey::from_base64(KeyAlgorithm::Ed25519, "not base64!"),
            Err(KeyError::Encoding(_))
        ));
    }

    #[test]
    fn debug_shows_peer_id_only() {
        let (_, public) = PrivateKey::generate(KeyAlgorithm::Ed25519, 0).unwrap();
        let debug = format!("{:?}", public);
        assert_eq!(debug, format!("ED25519({})", public.to_peer_id().unwrap()));
        assert!(!debug.contains(&public.to_string()));
    }

    #[test]
    fn algorithm_must_match_bytes() {
        let (_, public) = PrivateKey::generate(KeyAlgorithm::Secp256k1, 0).unwrap();
        assert!(PublicKey::from_bytes(KeyAlgorithm::Ed25519, public.as_bytes()).is_err());
    }
}
