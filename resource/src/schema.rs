//! Attribute declarations of the `libp2p_key` resource
//!
//! A host uses these to tell inputs from outputs, to validate inputs before anything is
//! generated, and to know which values it has to keep out of logs and diffs.

use crate::error::{ErrorCode, KeyResourceError, KeyResourceResult};
use libp2p_keygen::KeyAlgorithm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validator {
    OneOf(&'static [&'static str]),
    AtLeast(i64),
}

impl Validator {
    pub fn check_str(&self, attribute: &str, value: &str) -> KeyResourceResult<()> {
        match self {
            Validator::OneOf(allowed) if !allowed.contains(&value) => Err(invalid(format!(
                "attribute `{}` must be one of {}, got `{}`",
                attribute,
                allowed.join(", "),
                value
            ))),
            _ => Ok(()),
        }
    }

    pub fn check_int(&self, attribute: &str, value: i64) -> KeyResourceResult<()> {
        match self {
            Validator::AtLeast(min) if value < *min => Err(invalid(format!(
                "attribute `{}` must be at least {}, got {}",
                attribute, min, value
            ))),
            _ => Ok(()),
        }
    }
}

fn invalid(message: String) -> KeyResourceError {
    ErrorCode::ERR_INVALID_INPUT.with_message(message)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub sensitive: bool,
    /// Computed values survive a plan unchanged instead of becoming unknown.
    pub use_state_for_unknown: bool,
    pub validators: Vec<Validator>,
    pub description: &'static str,
}

impl Attribute {
    fn computed(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: AttributeKind::Computed,
            ty: AttributeType::String,
            sensitive: false,
            use_state_for_unknown: true,
            validators: Vec::new(),
            description,
        }
    }

    fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub attributes: Vec<Attribute>,
}

const KEY_TYPES: [&str; 4] = [
    KeyAlgorithm::Rsa.as_str(),
    KeyAlgorithm::Ed25519.as_str(),
    KeyAlgorithm::Secp256k1.as_str(),
    KeyAlgorithm::Ecdsa.as_str(),
];

impl Schema {
    pub fn key() -> Self {
        Self {
            attributes: vec![
                Attribute::computed("id", "Unique ID of the key (CID)"),
                Attribute {
                    name: "type",
                    kind: AttributeKind::Required,
                    ty: AttributeType::String,
                    sensitive: false,
                    use_state_for_unknown: false,
                    validators: vec![Validator::OneOf(&KEY_TYPES)],
                    description: "Key type",
                },
                Attribute {
                    name: "bits",
                    kind: AttributeKind::Optional,
                    ty: AttributeType::Int64,
                    sensitive: false,
                    use_state_for_unknown: false,
                    validators: vec![Validator::AtLeast(1)],
                    description: "Bits count for RSA key",
                },
                Attribute::computed("private", "Private key encoded in base64").sensitive(),
                Attribute::computed("public", "Public key encoded in base64").sensitive(),
                Attribute::computed("peer_id", "PeerID encoded in base58"),
            ],
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn sensitive(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.iter().filter(|a| a.sensitive).map(|a| a.name)
    }

    pub fn is_sensitive(&self, name: &str) -> bool {
        self.attribute(name).map(|a| a.sensitive).unwrap_or(false)
    }

    pub fn check_str(&self, name: &str, value: &str) -> KeyResourceResult<()> {
        self.validators(name).try_for_each(|v| v.check_str(name, value))
    }

    pub fn check_int(&self, name: &str, value: i64) -> KeyResourceResult<()> {
        self.validators(name).try_for_each(|v| v.check_int(name, value))
    }

    fn validators<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Validator> + 'a {
        self.attribute(name).into_iter().flat_map(|a| a.validators.iter())
    }
}
