use crate::{public::PublicKey, KeyAlgorithm, KeyError, Result};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rsa::{pkcs1::EncodeRsaPrivateKey, pkcs8::EncodePublicKey, RsaPrivateKey};
use std::fmt::{self, Debug, Display};
use zeroize::Zeroizing;

/// Smallest RSA modulus accepted for peer identities, as enforced by go-libp2p.
pub const MIN_RSA_BITS: i64 = 2048;
/// Largest RSA modulus accepted for peer identities, as enforced by go-libp2p.
pub const MAX_RSA_BITS: i64 = 8192;

/// Raw private key material of one of the supported algorithms.
///
/// The bytes are zeroed when the value is dropped. Only [`Display`] (base64) reveals them;
/// `Debug` prints a placeholder.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    algorithm: KeyAlgorithm,
    raw: Zeroizing<Vec<u8>>,
}

impl Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base64::encode(&self.raw[..]))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "secret {}", self.algorithm)
    }
}

impl PrivateKey {
    /// Draw a fresh key from the operating system's randomness and return it with its public half.
    ///
    /// `bits` only matters for RSA, where it must lie within [`MIN_RSA_BITS`]..=[`MAX_RSA_BITS`].
    pub fn generate(algorithm: KeyAlgorithm, bits: i64) -> Result<(Self, PublicKey)> {
        let (raw, public) = match algorithm {
            KeyAlgorithm::Rsa => generate_rsa(bits)?,
            KeyAlgorithm::Ed25519 => generate_ed25519(),
            KeyAlgorithm::Secp256k1 => generate_secp256k1(),
            KeyAlgorithm::Ecdsa => generate_ecdsa()?,
        };
        if raw.is_empty() {
            return Err(KeyError::Encoding(format!("empty {} private key", algorithm)));
        }
        let public = PublicKey::from_bytes(algorithm, &public)?;
        Ok((Self { algorithm, raw }, public))
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }
}

type RawPair = (Zeroizing<Vec<u8>>, Vec<u8>);

fn generate_rsa(bits: i64) -> Result<RawPair> {
    if !(MIN_RSA_BITS..=MAX_RSA_BITS).contains(&bits) {
        return Err(KeyError::Generation(format!(
            "rsa keys must be between {} and {} bits, got {}",
            MIN_RSA_BITS, MAX_RSA_BITS, bits
        )));
    }
    let key = RsaPrivateKey::new(&mut OsRng, bits as usize).map_err(KeyError::generation)?;
    let private = key
        .to_pkcs1_der()
        .map_err(|e| KeyError::encoding("rsa private key", e))?;
    let public = key
        .to_public_key()
        .to_public_key_der()
        .map_err(|e| KeyError::encoding("rsa public key", e))?;
    Ok((Zeroizing::new(private.as_bytes().to_vec()), public.as_bytes().to_vec()))
}

fn generate_ed25519() -> RawPair {
    let key = ed25519_dalek::SigningKey::generate(&mut OsRng);
    let keypair = Zeroizing::new(key.to_keypair_bytes());
    (
        Zeroizing::new(keypair.to_vec()),
        key.verifying_key().to_bytes().to_vec(),
    )
}

fn generate_secp256k1() -> RawPair {
    let key = k256::SecretKey::random(&mut OsRng);
    let public = key.public_key().to_encoded_point(true);
    (Zeroizing::new(key.to_bytes().to_vec()), public.as_bytes().to_vec())
}

fn generate_ecdsa() -> Result<RawPair> {
    let key = p256::SecretKey::random(&mut OsRng);
    let private = key
        .to_sec1_der()
        .map_err(|e| KeyError::encoding("ecdsa private key", e))?;
    let public = key
        .public_key()
        .to_public_key_der()
        .map_err(|e| KeyError::encoding("ecdsa public key", e))?;
    Ok((private, public.as_bytes().to_vec()))
}
