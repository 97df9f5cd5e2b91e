use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Textual form of a [`KeyPair`](crate::KeyPair)
///
/// `private` and `public` are standard padded base64 of the raw key bytes, `peer_id` is the
/// base58btc peer id and `content_id` the base32 CIDv1 of the same multihash. The values are not
/// redacted here; whoever persists them decides about sensitivity.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedKeyPair {
    pub private: String,
    pub public: String,
    pub peer_id: String,
    pub content_id: String,
}

impl Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("peer_id", &self.peer_id)
            .field("content_id", &self.content_id)
            .finish_non_exhaustive()
    }
}

impl EncodedKeyPair {
    pub fn decode_private(&self) -> Result<Vec<u8>> {
        base64::decode(&self.private).map_err(|e| KeyError::encoding("private key base64", e))
    }

    pub fn decode_public(&self) -> Result<Vec<u8>> {
        base64::decode(&self.public).map_err(|e| KeyError::encoding("public key base64", e))
    }
}
