//! The `libp2p_key` resource as seen by a declarative infrastructure host
//!
//! The host owns planning, diffing and persistence policy. This crate provides what it needs
//! from the key side: the attribute [`Schema`] (including which attributes are sensitive),
//! validation of user inputs, the persisted [`KeyModel`] record and the [`KeyResource`]
//! lifecycle with its `Absent`/`Present` states.

pub mod error;
mod lifecycle;
mod model;
mod provider;
mod request;
pub mod schema;
mod state;

pub use error::{ErrorCode, KeyResourceError, KeyResourceResult};
pub use lifecycle::{KeyResource, ResourceState};
pub use model::KeyModel;
pub use provider::{Provider, ProviderMetadata};
pub use request::{KeyRequest, KeySpec};
pub use schema::Schema;
pub use state::StateFile;
