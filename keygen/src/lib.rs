//! Generation of libp2p peer identities
//!
//! Four key algorithms are supported (RSA, Ed25519, Secp256k1 and ECDSA on NIST P-256). A
//! generated [`KeyPair`] carries the raw private and public key bytes together with the
//! [`PeerIdentity`] derived from the public key.
//!
//! # Raw encodings
//!
//! The byte layouts are the ones go-libp2p returns from `Raw()`, so that keys produced here can
//! be loaded by other libp2p implementations:
//!
//! | algorithm | private                      | public                         |
//! |-----------|------------------------------|--------------------------------|
//! | RSA       | PKCS#1 DER                   | X.509 SubjectPublicKeyInfo DER |
//! | Ed25519   | 32 bytes seed ‖ 32 bytes key | 32 bytes                       |
//! | Secp256k1 | 32 bytes scalar              | 33 bytes compressed SEC1 point |
//! | ECDSA     | SEC1 ECPrivateKey DER        | X.509 SubjectPublicKeyInfo DER |
//!
//! # Identification
//!
//! The peer id is the multihash over the protobuf encoding of the libp2p public key (identity
//! hash for short keys, SHA2-256 otherwise). The content id is a CIDv1 with the `libp2p-key`
//! codec wrapping the very same multihash, so both are pure functions of the public key.
//!
//! # Handling of key material
//!
//! Private key bytes live in [`zeroize::Zeroizing`] buffers, and no `Debug` implementation or
//! log statement in this crate ever prints them.

mod algorithm;
mod encoded;
mod error;
mod identity;
mod pair;
mod private;
mod public;

pub use algorithm::KeyAlgorithm;
pub use encoded::EncodedKeyPair;
pub use error::KeyError;
pub use identity::{PeerIdentity, LIBP2P_KEY_CODEC};
pub use libp2p_identity::PeerId;
pub use pair::KeyPair;
pub use private::{PrivateKey, MAX_RSA_BITS, MIN_RSA_BITS};
pub use public::PublicKey;

pub type Result<T> = std::result::Result<T, KeyError>;
