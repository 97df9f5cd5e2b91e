use crate::{
    error::{ErrorCode, KeyResourceResult},
    model::KeyModel,
    request::KeyRequest,
    schema::Schema,
};
use libp2p_keygen::KeyPair;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "key", rename_all = "snake_case")]
pub enum ResourceState {
    #[default]
    Absent,
    Present(KeyModel),
}

impl ResourceState {
    pub fn model(&self) -> Option<&KeyModel> {
        match self {
            ResourceState::Absent => None,
            ResourceState::Present(model) => Some(model),
        }
    }

    pub fn is_present(&self) -> bool {
        self.model().is_some()
    }
}

/// The `libp2p_key` resource.
///
/// Every operation takes the prior state and returns the next one; on error the prior state is
/// simply kept by the caller, so nothing is ever partially applied.
///
/// Note that [`KeyResource::update`] never touches key material. Changing `type` or `bits` of an
/// existing key only changes the recorded inputs; rotating a key means delete and create.
#[derive(Debug, Clone)]
pub struct KeyResource {
    schema: Schema,
}

impl Default for KeyResource {
    fn default() -> Self {
        Self { schema: Schema::key() }
    }
}

impl KeyResource {
    pub const TYPE_SUFFIX: &'static str = "_key";

    pub fn type_name(provider_type_name: &str) -> String {
        format!("{}{}", provider_type_name, Self::TYPE_SUFFIX)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Absent → Present with freshly generated key material.
    pub fn create(&self, request: &KeyRequest, state: &ResourceState) -> KeyResourceResult<ResourceState> {
        if let ResourceState::Present(model) = state {
            return Err(ErrorCode::ERR_ALREADY_EXISTS.with_message(format!(
                "key {} already exists, delete it before creating a new one",
                model.peer_id
            )));
        }
        let spec = request.validate(&self.schema)?;
        let pair = KeyPair::generate(spec.algorithm, spec.generation_bits())?;
        let model = KeyModel::new(spec.algorithm, spec.bits, pair.encode());
        tracing::info!(key_type = %model.key_type, peer_id = %model.peer_id, id = %model.id, "created key");
        Ok(ResourceState::Present(model))
    }

    /// Key material has no source of truth besides the state itself, so reading returns it as is.
    pub fn read(&self, state: &ResourceState) -> KeyResourceResult<KeyModel> {
        state
            .model()
            .cloned()
            .ok_or_else(|| ErrorCode::ERR_NOT_FOUND.with_message("no key has been created"))
    }

    /// Present → Present, passing the new inputs through while keeping all computed values.
    pub fn update(&self, request: &KeyRequest, state: &ResourceState) -> KeyResourceResult<ResourceState> {
        let prior = self.read(state)?;
        let spec = request.validate(&self.schema)?;
        if spec.algorithm != prior.key_type || spec.bits != prior.bits {
            tracing::warn!(
                peer_id = %prior.peer_id,
                from = %prior.key_type,
                to = %spec.algorithm,
                "key inputs changed, existing key material is kept; recreate the key to rotate it"
            );
        }
        Ok(ResourceState::Present(KeyModel {
            key_type: spec.algorithm,
            bits: spec.bits,
            ..prior
        }))
    }

    /// Present → Absent. Nothing is revoked, the record is just dropped.
    pub fn delete(&self, state: &ResourceState) -> ResourceState {
        if let ResourceState::Present(model) = state {
            tracing::info!(peer_id = %model.peer_id, "deleted key");
        }
        ResourceState::Absent
    }
}
