use super::KeyCliCommand;
use libp2p_key_resource::{ErrorCode, KeyResourceResult};
use libp2p_keygen::{KeyAlgorithm, PeerIdentity, PublicKey};
use serde::Serialize;

#[derive(clap::Parser, Clone, Debug)]
/// Derive peer id and content id from a base64 public key
pub struct PeerIdOpts {
    /// Key type of the public key
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    key_type: String,
    /// Public key in base64, as found in the `public` attribute
    #[arg(long, value_name = "BASE64")]
    public: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Output {
    id: String,
    peer_id: String,
}

pub struct PeerId;

impl KeyCliCommand for PeerId {
    type Opt = PeerIdOpts;
    type Output = Output;

    fn run(opts: Self::Opt) -> KeyResourceResult<Self::Output> {
        let key_type: KeyAlgorithm = opts.key_type.parse()?;
        let public = PublicKey::from_base64(key_type, opts.public.trim()).map_err(|e| {
            ErrorCode::ERR_INVALID_INPUT.with_message(format!("not a {} public key: {}", key_type, e))
        })?;
        let identity = PeerIdentity::from_public_key(&public)?;
        Ok(Output {
            id: identity.content_id().to_string(),
            peer_id: identity.to_string(),
        })
    }

    fn pretty(result: Self::Output) -> String {
        format!("peer_id  {}\nid       {}", result.peer_id, result.id)
    }
}
