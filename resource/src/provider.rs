use crate::{lifecycle::KeyResource, schema::Schema};
use serde::Serialize;

/// Describes what this provider offers to a host.
///
/// There is nothing to configure at provider level and no data sources, only the key resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    pub type_name: &'static str,
    pub version: &'static str,
    pub resources: Vec<String>,
    pub data_sources: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Provider {
    key: KeyResource,
}

impl Provider {
    pub const TYPE_NAME: &'static str = "libp2p";

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: Self::TYPE_NAME,
            version: env!("CARGO_PKG_VERSION"),
            resources: vec![KeyResource::type_name(Self::TYPE_NAME)],
            data_sources: Vec::new(),
        }
    }

    /// The provider's own configuration schema, which has no attributes.
    pub fn schema(&self) -> Schema {
        Schema { attributes: Vec::new() }
    }

    pub fn key(&self) -> &KeyResource {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_the_key_resource() {
        let provider = Provider::default();
        let meta = provider.metadata();
        assert_eq!(meta.type_name, "libp2p");
        assert_eq!(meta.resources, vec!["libp2p_key".to_owned()]);
        assert!(meta.data_sources.is_empty());
        assert!(provider.schema().attributes.is_empty());
        assert_eq!(provider.key().schema(), &Schema::key());
    }
}
