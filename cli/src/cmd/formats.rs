use libp2p_key_resource::{KeyResourceError, KeyResourceResult};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
#[allow(non_camel_case_types)]
#[allow(clippy::upper_case_acronyms)]
pub enum CliResult<T: Serialize> {
    OK { code: &'static str, result: T },
    ERROR(KeyResourceError),
}
const OK: &str = "OK";
impl<T: Serialize> From<KeyResourceResult<T>> for CliResult<T> {
    fn from(res: KeyResourceResult<T>) -> Self {
        match res {
            Ok(result) => CliResult::OK { code: OK, result },
            Err(err) => CliResult::ERROR(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libp2p_key_resource::ErrorCode;

    #[test]
    fn envelope() {
        let ok: CliResult<u8> = Ok(1).into();
        assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"code":"OK","result":1}"#);
        let err: CliResult<u8> = Err(ErrorCode::ERR_IO.with_message("x")).into();
        assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"code":"ERR_IO","message":"x"}"#);
    }
}
