use crate::{
    error::{ErrorCode, KeyResourceResult},
    schema::Schema,
};
use libp2p_keygen::KeyAlgorithm;
use serde::{Deserialize, Serialize};

/// The user supplied inputs of a `libp2p_key`, exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRequest {
    #[serde(rename = "type")]
    pub key_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bits: Option<i64>,
}

/// A request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub algorithm: KeyAlgorithm,
    pub bits: Option<i64>,
}

impl KeyRequest {
    pub fn new(key_type: impl Into<String>, bits: Option<i64>) -> Self {
        Self {
            key_type: key_type.into(),
            bits,
        }
    }

    /// Check the inputs against the schema and map the type name onto its algorithm.
    pub fn validate(&self, schema: &Schema) -> KeyResourceResult<KeySpec> {
        schema.check_str("type", &self.key_type)?;
        if let Some(bits) = self.bits {
            schema.check_int("bits", bits)?;
        }
        let algorithm = self.key_type.parse::<KeyAlgorithm>()?;
        if algorithm.uses_bits() && self.bits.is_none() {
            return Err(ErrorCode::ERR_INVALID_INPUT
                .with_message(format!("bits is required for {} keys", algorithm)));
        }
        Ok(KeySpec {
            algorithm,
            bits: self.bits,
        })
    }
}

impl KeySpec {
    /// The bit count handed to the generator. Only algorithms that ignore it may leave it out.
    pub fn generation_bits(&self) -> i64 {
        self.bits.unwrap_or_default()
    }
}
