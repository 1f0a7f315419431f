//! Rule configuration: the `exceptions` option and its closed vocabulary

use crate::core::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// The ten `Reflect` methods a legacy form can map to. This enum doubles as
/// the vocabulary for the `exceptions` option, so entry validation falls out
/// of deserialization: anything outside the set is rejected by serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReflectMethod {
    Apply,
    DefineProperty,
    DeleteProperty,
    GetOwnPropertyDescriptor,
    GetPrototypeOf,
    Has,
    IsExtensible,
    OwnKeys,
    PreventExtensions,
    SetPrototypeOf,
}

impl ReflectMethod {
    /// Method name with the `Reflect.` qualifier stripped
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::DefineProperty => "defineProperty",
            Self::DeleteProperty => "deleteProperty",
            Self::GetOwnPropertyDescriptor => "getOwnPropertyDescriptor",
            Self::GetPrototypeOf => "getPrototypeOf",
            Self::Has => "has",
            Self::IsExtensible => "isExtensible",
            Self::OwnKeys => "ownKeys",
            Self::PreventExtensions => "preventExtensions",
            Self::SetPrototypeOf => "setPrototypeOf",
        }
    }

    /// Qualified name exactly as surfaced in diagnostic messages
    pub fn qualified_name(&self) -> &'static str {
        match self {
            Self::Apply => "Reflect.apply",
            Self::DefineProperty => "Reflect.defineProperty",
            Self::DeleteProperty => "Reflect.deleteProperty",
            Self::GetOwnPropertyDescriptor => "Reflect.getOwnPropertyDescriptor",
            Self::GetPrototypeOf => "Reflect.getPrototypeOf",
            Self::Has => "Reflect.has",
            Self::IsExtensible => "Reflect.isExtensible",
            Self::OwnKeys => "Reflect.ownKeys",
            Self::PreventExtensions => "Reflect.preventExtensions",
            Self::SetPrototypeOf => "Reflect.setPrototypeOf",
        }
    }
}

/// Options object accepted by the rule, the first element of the host's
/// positional options array. The schema is closed: unknown keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferReflectConfig {
    #[serde(default)]
    pub exceptions: Vec<ReflectMethod>,
}

impl PreferReflectConfig {
    /// Build the configuration from the host-provided options array. An
    /// absent, null, or empty first element means defaults. Invalid entries,
    /// unknown keys, and duplicates are rejected before the rule activates.
    pub fn from_options(options: &[Value]) -> Result<Self> {
        let config = match options.first() {
            None | Some(Value::Null) => Self::default(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| Error::Configuration(e.to_string()))?,
        };
        config.validate()?;
        log::debug!("prefer-reflect exceptions: {:?}", config.exceptions);
        Ok(config)
    }

    /// The `exceptions` schema is a set, not a list
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for method in &self.exceptions {
            if !seen.insert(method) {
                return Err(Error::Configuration(format!(
                    "duplicate exception entry '{}'",
                    method.short_name()
                )));
            }
        }
        Ok(())
    }

    /// The read-only exception set shared by every matcher
    pub fn exception_set(&self) -> HashSet<ReflectMethod> {
        self.exceptions.iter().copied().collect()
    }
}
