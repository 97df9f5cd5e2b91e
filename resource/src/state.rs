use crate::{
    error::{ErrorCode, KeyResourceResult, KeyResourceResultExt},
    lifecycle::ResourceState,
    model::KeyModel,
};
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// A JSON file holding the record of one key.
///
/// A missing file is an absent key. Writes go to a temporary file in the same directory that
/// is then renamed over the target, so a crash never leaves half a record behind. On unix the
/// temporary file, and therefore the state file, is only readable by its owner.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> KeyResourceResult<ResourceState> {
        let s = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ResourceState::Absent),
            Err(e) => {
                return Err(e).res_err_ctx(ErrorCode::ERR_IO, format!("reading {}", self.path.display()));
            }
        };
        let model: KeyModel = serde_json::from_str(&s)
            .res_err_ctx(ErrorCode::ERR_STATE_INVALID, format!("parsing {}", self.path.display()))?;
        Ok(ResourceState::Present(model))
    }

    pub fn store(&self, state: &ResourceState) -> KeyResourceResult<()> {
        match state {
            ResourceState::Absent => self.remove(),
            ResourceState::Present(model) => self.write(model, true),
        }
    }

    /// Record a newly created key, failing with `ERR_ALREADY_EXISTS` if the file exists by now.
    ///
    /// The check happens when the file is moved into place, so of two concurrent creates that
    /// both loaded an absent state only the first one succeeds.
    pub fn store_new(&self, model: &KeyModel) -> KeyResourceResult<()> {
        self.write(model, false)
    }

    fn write(&self, model: &KeyModel, replace: bool) -> KeyResourceResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let json = serde_json::to_vec_pretty(model).res_err(ErrorCode::ERR_STATE_INVALID)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .res_err_ctx(ErrorCode::ERR_IO, format!("creating temporary file in {}", dir.display()))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .res_err_ctx(ErrorCode::ERR_IO, "writing temporary state file")?;
        let persisted = if replace {
            tmp.persist(&self.path)
        } else {
            tmp.persist_noclobber(&self.path)
        };
        persisted.map_err(|e| match e.error.kind() {
            ErrorKind::AlreadyExists => ErrorCode::ERR_ALREADY_EXISTS.with_message(format!(
                "{} already holds a key, delete it before creating a new one",
                self.path.display()
            )),
            _ => ErrorCode::ERR_IO.with_message(format!("writing {} ({})", self.path.display(), e.error)),
        })?;
        tracing::debug!(path = %self.path.display(), "stored key state");
        Ok(())
    }

    fn remove(&self) -> KeyResourceResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed key state");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).res_err_ctx(ErrorCode::ERR_IO, format!("removing {}", self.path.display())),
        }
    }
}
