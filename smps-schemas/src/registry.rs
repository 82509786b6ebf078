//! Form Registry for Version Management
//!
//! Centralized form lookup with versioning, so a client can ask for the
//! latest `power_stage` form without knowing which versions exist.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::forms::{self, FormSchema};
use crate::{SchemaError, SchemaResult};

/// Thread-safe form registry with version management
pub struct FormRegistry {
    /// Forms indexed by qualified name
    forms: RwLock<HashMap<String, FormSchema>>,

    /// Latest version for each base name
    latest: RwLock<HashMap<String, String>>,
}

impl FormRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            forms: RwLock::new(HashMap::new()),
            latest: RwLock::new(HashMap::new()),
        }
    }

    /// Register a form under its qualified name
    pub fn register(&self, form: FormSchema) -> SchemaResult<()> {
        form.check()?;

        let qualified_name = form.qualified_name();
        let base_name = form.name.clone();
        let version = form.version.clone();

        {
            let mut forms = self.forms.write().map_err(|_| SchemaError::Lock)?;
            if forms.contains_key(&qualified_name) {
                return Err(SchemaError::InvalidSchema(format!(
                    "Form {} already registered",
                    qualified_name
                )));
            }
            forms.insert(qualified_name, form);
        }

        {
            let mut latest = self.latest.write().map_err(|_| SchemaError::Lock)?;
            let newer = latest
                .get(&base_name)
                .map_or(true, |current| version_key(&version) > version_key(current));
            if newer {
                latest.insert(base_name, version);
            }
        }

        Ok(())
    }

    /// Get a form by qualified name
    pub fn get(&self, name: &str) -> SchemaResult<FormSchema> {
        let forms = self.forms.read().map_err(|_| SchemaError::Lock)?;

        forms
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Get the latest version of a form
    pub fn get_latest(&self, base_name: &str) -> SchemaResult<FormSchema> {
        let qualified_name = {
            let latest = self.latest.read().map_err(|_| SchemaError::Lock)?;
            let version = latest
                .get(base_name)
                .ok_or_else(|| SchemaError::NotFound(format!("No versions of {}", base_name)))?;
            format!("{}_{}", base_name, version)
        };

        self.get(&qualified_name)
    }

    /// Qualified names of every registered form, sorted
    pub fn names(&self) -> SchemaResult<Vec<String>> {
        let forms = self.forms.read().map_err(|_| SchemaError::Lock)?;

        let mut names: Vec<String> = forms.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Load the standard power stage, magnetics and thermal forms
    pub fn load_defaults(&self) -> SchemaResult<()> {
        self.register(forms::power_stage_v1()?)?;
        self.register(forms::magnetics_v1()?)?;
        self.register(forms::thermal_v1()?)?;

        Ok(())
    }
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Orders "v2" before "v10"; tags without a number sort first.
fn version_key(version: &str) -> (u32, &str) {
    let number = version
        .strip_prefix('v')
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);
    (number, version)
}

lazy_static::lazy_static! {
    /// Process-wide registry with the standard forms loaded
    pub static ref DEFAULT_REGISTRY: FormRegistry = {
        let registry = FormRegistry::new();
        // Standard forms are covered by tests; a failure leaves the registry empty
        let _ = registry.load_defaults();
        registry
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_retrieve() {
        let registry = FormRegistry::new();
        let form = forms::thermal_v1().unwrap();

        registry.register(form.clone()).unwrap();

        let retrieved = registry.get("thermal_v1").unwrap();
        assert_eq!(retrieved, form);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let registry = FormRegistry::new();
        registry.register(forms::thermal_v1().unwrap()).unwrap();

        let again = registry.register(forms::thermal_v1().unwrap());
        assert!(matches!(again, Err(SchemaError::InvalidSchema(_))));
    }

    #[test]
    fn latest_version_compares_numerically() {
        let registry = FormRegistry::new();
        let base = forms::power_stage_v1().unwrap();

        for version in ["v2", "v10", "v9"] {
            registry
                .register(FormSchema { version: version.to_string(), ..base.clone() })
                .unwrap();
        }

        assert_eq!(registry.get_latest("power_stage").unwrap().version, "v10");
        assert!(matches!(registry.get_latest("thermal"), Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn older_versions_stay_addressable() {
        let registry = FormRegistry::new();
        let v1 = forms::magnetics_v1().unwrap();
        registry.register(v1.clone()).unwrap();
        registry.register(FormSchema { version: "v2".to_string(), ..v1.clone() }).unwrap();

        assert_eq!(registry.get("magnetics_v1").unwrap(), v1);
        assert_eq!(registry.get_latest("magnetics").unwrap().version, "v2");
        assert_eq!(registry.names().unwrap(), vec!["magnetics_v1", "magnetics_v2"]);
    }

    #[test]
    fn default_registry_has_standard_forms() {
        assert_eq!(
            DEFAULT_REGISTRY.names().unwrap(),
            vec!["magnetics_v1", "power_stage_v1", "thermal_v1"]
        );
        assert!(DEFAULT_REGISTRY.get("power_stage_v9").is_err());
    }
}
