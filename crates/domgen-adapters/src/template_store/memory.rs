//! In-memory template store with the bundled templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use domgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::ComponentKind,
    error::DomgenResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateStore {
    inner: Arc<RwLock<HashMap<ComponentKind, String>>>,
    label: String,
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            label: "in-memory templates".into(),
        }
    }

    /// Create a store holding the templates compiled into the binary.
    pub fn bundled() -> Self {
        let store = Self {
            label: "bundled templates".into(),
            ..Self::new()
        };
        if let Ok(mut inner) = store.inner.write() {
            for kind in ComponentKind::ALL {
                inner.insert(kind, builtin_templates::template(kind).to_string());
            }
        }
        store
    }

    pub fn insert(&self, kind: ComponentKind, template: impl Into<String>) -> DomgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(kind, template.into());
        Ok(())
    }

    pub fn remove(&self, kind: ComponentKind) -> DomgenResult<Option<String>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        Ok(inner.remove(&kind))
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn load(&self, kind: ComponentKind) -> DomgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        inner.get(&kind).cloned().ok_or_else(|| {
            ApplicationError::TemplateRead {
                kind,
                reason: format!("no template registered in {}", self.label),
            }
            .into()
        })
    }

    fn contains(&self, kind: ComponentKind) -> bool {
        self.inner
            .read()
            .map(|inner| inner.contains_key(&kind))
            .unwrap_or(false)
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
