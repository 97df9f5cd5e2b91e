use crate::{public::PublicKey, KeyError, Result};
use cid::Cid;
use libp2p_identity::PeerId;
use multihash::Multihash;
use std::fmt::{self, Display};

/// Multicodec code of `libp2p-key`, the content type of a peer id CID.
pub const LIBP2P_KEY_CODEC: u64 = 0x72;

/// The identifiers derived from a public key.
///
/// Both views share one multihash: the peer id renders it base58btc, the content id wraps it in
/// a CIDv1 rendered base32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerIdentity {
    peer_id: PeerId,
}

impl PeerIdentity {
    pub fn from_public_key(public: &PublicKey) -> Result<Self> {
        Ok(Self {
            peer_id: public.to_peer_id()?,
        })
    }

    /// Parse a peer id CID as produced by [`PeerIdentity::content_id`].
    pub fn from_content_id(s: &str) -> Result<Self> {
        let cid: Cid = s.parse().map_err(|e| KeyError::encoding("content id", e))?;
        if cid.codec() != LIBP2P_KEY_CODEC {
            return Err(KeyError::Encoding(format!(
                "content id codec {:#x} is not libp2p-key",
                cid.codec()
            )));
        }
        let peer_id = PeerId::from_multihash(cid.hash().to_owned())
            .map_err(|mh| KeyError::Encoding(format!("multihash code {:#x} is no peer id", mh.code())))?;
        Ok(Self { peer_id })
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    pub fn multihash(&self) -> Multihash<64> {
        self.peer_id.into()
    }

    pub fn content_id(&self) -> Cid {
        Cid::new_v1(LIBP2P_KEY_CODEC, self.multihash())
    }
}

impl Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.peer_id)
    }
}

impl From<PeerId> for PeerIdentity {
    fn from(peer_id: PeerId) -> Self {
        Self { peer_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeyAlgorithm;

    const IDENTITY: u64 = 0x00;
    const SHA2_256: u64 = 0x12;

    fn identity(algorithm: KeyAlgorithm) -> PeerIdentity {
        let bits = if algorithm.uses_bits() { 2048 } else { 0 };
        let (_, public) = crate::PrivateKey::generate(algorithm, bits).unwrap();
        PeerIdentity::from_public_key(&public).unwrap()
    }

    #[test]
    fn short_keys_are_inlined() {
        assert_eq!(identity(KeyAlgorithm::Ed25519).multihash().code(), IDENTITY);
        assert_eq!(identity(KeyAlgorithm::Secp256k1).multihash().code(), IDENTITY);
        assert_eq!(identity(KeyAlgorithm::Ecdsa).multihash().code(), SHA2_256);
        assert_eq!(identity(KeyAlgorithm::Rsa).multihash().code(), SHA2_256);
    }

    #[test]
    fn textual_prefixes() {
        for algorithm in KeyAlgorithm::ALL {
            let prefix = match algorithm {
                KeyAlgorithm::Ed25519 => "12D3KooW",
                KeyAlgorithm::Secp256k1 => "16Uiu2",
                KeyAlgorithm::Rsa | KeyAlgorithm::Ecdsa => "Qm",
            };
            let id = identity(algorithm);
            assert!(id.to_string().starts_with(prefix), "{}: {}", algorithm, id);
            let cid = id.content_id().to_string();
            assert!(cid.starts_with("bafz"), "{}: {}", algorithm, cid);
        }
    }

    #[test]
    fn content_id_roundtrip() {
        for algorithm in [KeyAlgorithm::Ed25519, KeyAlgorithm::Ecdsa] {
            let id = identity(algorithm);
            let cid = id.content_id().to_string();
            assert_eq!(PeerIdentity::from_content_id(&cid).unwrap(), id);
        }
    }

    #[test]
    fn content_id_must_be_libp2p_key() {
        let id = identity(KeyAlgorithm::Ed25519);
        let raw = Cid::new_v1(0x55, id.multihash()).to_string();
        assert!(matches!(PeerIdentity::from_content_id(&raw), Err(KeyError::Encoding(_))));
        assert!(matches!(PeerIdentity::from_content_id("nope"), Err(KeyError::Encoding(_))));
    }
}
