use libp2p_keygen::{EncodedKeyPair, KeyAlgorithm};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// The persisted record of a `libp2p_key`.
///
/// Field names are the attribute names of the schema. `bits` is stored as it was requested,
/// even for algorithms that ignore it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyModel {
    pub id: String,
    #[serde(rename = "type")]
    pub key_type: KeyAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<i64>,
    pub private: String,
    pub public: String,
    pub peer_id: String,
}

impl Debug for KeyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyModel")
            .field("id", &self.id)
            .field("type", &self.key_type)
            .field("bits", &self.bits)
            .field("private", &"<sensitive>")
            .field("public", &"<sensitive>")
            .field("peer_id", &self.peer_id)
            .finish()
    }
}

impl KeyModel {
    pub fn new(key_type: KeyAlgorithm, bits: Option<i64>, encoded: EncodedKeyPair) -> Self {
        let EncodedKeyPair {
            private,
            public,
            peer_id,
            content_id,
        } = encoded;
        Self {
            id: content_id,
            key_type,
            bits,
            private,
            public,
            peer_id,
        }
    }

    /// Look up an attribute by its schema name.
    pub fn get(&self, attribute: &str) -> Option<String> {
        match attribute {
            "id" => Some(self.id.clone()),
            "type" => Some(self.key_type.to_string()),
            "bits" => self.bits.map(|b| b.to_string()),
            "private" => Some(self.private.clone()),
            "public" => Some(self.public.clone()),
            "peer_id" => Some(self.peer_id.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> KeyModel {
        KeyModel {
            id: "bafzaa".into(),
            key_type: KeyAlgorithm::Ed25519,
            bits: None,
            private: "cHJpdmF0ZQ==".into(),
            public: "cHVibGlj".into(),
            peer_id: "12D3KooW".into(),
        }
    }

    #[test]
    fn debug_is_redacted() {
        let debug = format!("{:?}", model());
        assert!(!debug.contains("cHJpdmF0ZQ=="));
        assert!(!debug.contains("cHVibGlj"));
        assert!(debug.contains("12D3KooW"));
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(model()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "bafzaa",
                "type": "ED25519",
                "private": "cHJpdmF0ZQ==",
                "public": "cHVibGlj",
                "peer_id": "12D3KooW",
            })
        );
        let mut with_bits = model();
        with_bits.bits = Some(7);
        let back: KeyModel = serde_json::from_str(&serde_json::to_string(&with_bits).unwrap()).unwrap();
        assert_eq!(back, with_bits);
    }

    #[test]
    fn attribute_lookup() {
        let m = model();
        assert_eq!(m.get("type").as_deref(), Some("ED25519"));
        assert_eq!(m.get("bits"), None);
        assert_eq!(m.get("nope"), None);
    }
}
