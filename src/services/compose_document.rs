use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Sequence, Value};

use crate::domain::AppError;

/// In-memory compose document rooted at a YAML mapping.
///
/// All writes go through [`ComposeDocument::set`], which creates intermediate
/// mappings on demand; no key-path write can fail on a missing ancestor.
#[derive(Debug, Default, Clone)]
pub struct ComposeDocument {
    root: Mapping,
}

impl ComposeDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the document, or start empty when `from_scratch` holds or the
    /// file is absent. Parse failures are fatal.
    pub fn load(path: &Path, from_scratch: bool) -> Result<Self, AppError> {
        if from_scratch || !path.exists() {
            return Ok(Self::empty());
        }
        Self::load_required(path)
    }

    /// Load the document; the file must exist and parse.
    pub fn load_required(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Ok(Self::empty());
        }
        let root: Mapping = serde_yaml::from_str(&text).map_err(|e| AppError::ParseError {
            what: path.display().to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// Serialize with default block style and rewrite the file in one pass.
    pub fn save(&self, path: &Path) -> Result<(), AppError> {
        let text = serde_yaml::to_string(&Value::Mapping(self.root.clone())).map_err(|e| {
            AppError::ParseError { what: path.display().to_string(), details: e.to_string() }
        })?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Upsert `value` at `path`, creating intermediate mappings on demand.
    ///
    /// A non-mapping intermediate is replaced by an empty mapping; the final
    /// key overwrites any prior value, including type changes.
    pub fn set(&mut self, path: &[&str], value: impl Into<Value>) {
        debug_assert!(!path.is_empty());
        let mut current = &mut self.root;
        for key in &path[..path.len() - 1] {
            let entry = current
                .entry(Value::String((*key).to_string()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
            if !entry.is_mapping() {
                *entry = Value::Mapping(Mapping::new());
            }
            let Value::Mapping(next) = entry else { unreachable!() };
            current = next;
        }
        current.insert(Value::String(path[path.len() - 1].to_string()), value.into());
    }

    /// Upsert under `services.<service>.<rest>`.
    pub fn set_service(&mut self, service: &str, rest: &[&str], value: impl Into<Value>) {
        let mut path = Vec::with_capacity(rest.len() + 2);
        path.push("services");
        path.push(service);
        path.extend_from_slice(rest);
        self.set(&path, value);
    }

    /// Read-only lookup, mainly for assertions and the extractor.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current: &Value = self.root.get(Value::String(path.first()?.to_string()))?;
        for key in &path[1..] {
            current = current.as_mapping()?.get(Value::String((*key).to_string()))?;
        }
        Some(current)
    }

    fn volumes_mut(&mut self, service: &str) -> Result<&mut Sequence, AppError> {
        self.root
            .get_mut(Value::String("services".to_string()))
            .and_then(Value::as_mapping_mut)
            .and_then(|services| services.get_mut(Value::String(service.to_string())))
            .and_then(Value::as_mapping_mut)
            .and_then(|svc| svc.get_mut(Value::String("volumes".to_string())))
            .and_then(Value::as_sequence_mut)
            .ok_or_else(|| AppError::MissingVolumes { service: service.to_string() })
    }

    /// Append-if-absent / remove-if-present on the service's volume list.
    ///
    /// Membership is exact string equality on the whole `source:target:mode`
    /// entry; a mode-only change is a distinct entry. The sequence must have
    /// been created earlier in the pipeline. Returns whether the list changed.
    pub fn ensure_volume(
        &mut self,
        service: &str,
        entry: &str,
        present: bool,
    ) -> Result<bool, AppError> {
        let volumes = self.volumes_mut(service)?;
        let needle = Value::String(entry.to_string());
        let position = volumes.iter().position(|v| *v == needle);
        match (position, present) {
            (None, true) => {
                volumes.push(needle);
                Ok(true)
            }
            (Some(index), false) => {
                volumes.remove(index);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Unconditional append to the service's volume list.
    pub fn push_volume(&mut self, service: &str, entry: &str) -> Result<(), AppError> {
        self.volumes_mut(service)?.push(Value::String(entry.to_string()));
        Ok(())
    }
}
