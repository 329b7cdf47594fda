//! Registry of named constants
//!
//! A [`Registry`] is an insertion-ordered table from name to [`Constant`].
//! Entries are shared: an alias is a second key pointing at the same record,
//! never a copy. Derived constants are ordinary definitions whose value the
//! caller computes from earlier entries with [`Registry::value`].

mod constant;
mod error;

pub use constant::{Constant, ConstantValue, References};
pub use error::RegistryError;

use indexmap::IndexMap;
use std::sync::Arc;

/// What happens when a name is registered twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the previous entry, keeping its position
    #[default]
    Overwrite,
    /// Fail with [`RegistryError::Duplicate`]
    Reject,
}

/// Ordered table of constants
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constants: IndexMap<String, Arc<Constant>>,
    policy: DuplicatePolicy,
}

impl Registry {
    /// Creates an empty registry with last-write-wins semantics
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with the given duplicate policy
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            constants: IndexMap::new(),
            policy,
        }
    }

    /// Duplicate policy in effect
    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Defines a constant and returns the stored record
    ///
    /// `references` accepts a single string, a list of strings or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is taken and the
    /// policy is [`DuplicatePolicy::Reject`]
    pub fn define(
        &mut self,
        name: &str,
        value: impl Into<ConstantValue>,
        unit: Option<&str>,
        description: &str,
        error: Option<f64>,
        references: impl Into<References>,
    ) -> Result<Arc<Constant>, RegistryError> {
        let constant = Constant::new(name, value, unit, description)
            .with_error(error)
            .with_references(references);
        self.insert(constant)
    }

    /// Stores an already built constant under its own name
    ///
    /// # Errors
    ///
    /// Same as [`Registry::define`]
    pub fn insert(&mut self, constant: Constant) -> Result<Arc<Constant>, RegistryError> {
        log::debug!("defining {constant}");
        let name = constant.name.clone();
        let record = Arc::new(constant);
        self.bind(name, Arc::clone(&record))?;
        Ok(record)
    }

    /// Binds `name` to the record already registered as `original`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownConstant`] if `original` is not
    /// registered, or [`RegistryError::Duplicate`] under the reject policy
    pub fn alias(&mut self, name: &str, original: &str) -> Result<(), RegistryError> {
        let record = Arc::clone(self.lookup(original)?);
        log::debug!("aliasing `{name}` to `{original}`");
        self.bind(name.to_string(), record)
    }

    fn bind(&mut self, name: String, record: Arc<Constant>) -> Result<(), RegistryError> {
        if self.constants.contains_key(&name) {
            match self.policy {
                DuplicatePolicy::Reject => return Err(RegistryError::Duplicate { name }),
                DuplicatePolicy::Overwrite => log::warn!("constant `{name}` redefined, previous entry replaced"),
            }
        }
        self.constants.insert(name, record);
        Ok(())
    }

    /// Looks up a constant by name or alias
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownConstant`] if the name is not registered
    pub fn lookup(&self, name: &str) -> Result<&Arc<Constant>, RegistryError> {
        self.constants
            .get(name)
            .ok_or_else(|| RegistryError::UnknownConstant { name: name.to_string() })
    }

    /// Numeric value of a registered constant
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownConstant`] for unknown names and
    /// [`RegistryError::NotNumeric`] for literal values
    pub fn value(&self, name: &str) -> Result<f64, RegistryError> {
        let constant = self.lookup(name)?;
        constant.value.as_f64().ok_or_else(|| RegistryError::NotNumeric {
            name: name.to_string(),
            value: constant.value.to_string(),
        })
    }

    /// Every entry, aliases included, in insertion order
    #[must_use]
    pub fn all(&self) -> &IndexMap<String, Arc<Constant>> {
        &self.constants
    }

    /// Iterates over `(name, constant)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Constant)> {
        self.constants.iter().map(|(name, record)| (name.as_str(), record.as_ref()))
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constants.keys().map(String::as_str)
    }

    /// Other names bound to the same record as `name`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownConstant`] if the name is not registered
    pub fn aliases_of(&self, name: &str) -> Result<Vec<&str>, RegistryError> {
        let record = self.lookup(name)?;
        Ok(self
            .constants
            .iter()
            .filter(|(other, other_record)| other.as_str() != name && Arc::ptr_eq(record, other_record))
            .map(|(other, _)| other.as_str())
            .collect())
    }

    /// Returns true if the name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Number of entries, aliases included
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns true if nothing has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Registry {
        let mut registry = Registry::new();
        registry
            .define("LIFE_UNIVERSE", 42, None, "Answer to life, the Universe and everything", None, None::<&str>)
            .unwrap();
        registry.define("TEAPOT", "418", None, "I am a teapot", None, None::<&str>).unwrap();
        registry
    }

    #[test]
    fn test_define_and_lookup() {
        let registry = sample();
        let constant = registry.lookup("LIFE_UNIVERSE").unwrap();
        assert_eq!(constant.value, ConstantValue::Integer(42));
        assert_eq!(constant.unit, None);
        assert!(constant.references.is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = sample();
        let error = registry.lookup("life_universe").unwrap_err();
        assert_eq!(error, RegistryError::UnknownConstant { name: "life_universe".to_string() });
    }

    #[test]
    fn test_alias_shares_record() {
        let mut registry = sample();
        registry.alias("l", "LIFE_UNIVERSE").unwrap();

        let original = registry.lookup("LIFE_UNIVERSE").unwrap();
        let alias = registry.lookup("l").unwrap();
        assert!(Arc::ptr_eq(original, alias));
        assert_eq!(registry.names().collect::<Vec<_>>(), ["LIFE_UNIVERSE", "TEAPOT", "l"]);
        assert_eq!(registry.aliases_of("l").unwrap(), ["LIFE_UNIVERSE"]);
    }

    #[test]
    fn test_all_lists_definitions_and_aliases() {
        let mut registry = sample();
        registry.alias("l", "LIFE_UNIVERSE").unwrap();

        let all = registry.all();
        assert_eq!(all.keys().map(String::as_str).collect::<Vec<_>>(), ["LIFE_UNIVERSE", "TEAPOT", "l"]);
        assert!(Arc::ptr_eq(&all["l"], &all["LIFE_UNIVERSE"]));
        assert_eq!(all["l"].value, all["LIFE_UNIVERSE"].value);
        assert_eq!(all["l"].description, all["LIFE_UNIVERSE"].description);
        assert!(!Arc::ptr_eq(&all["TEAPOT"], &all["LIFE_UNIVERSE"]));
    }

    #[test]
    fn test_uncertainty_is_stored() {
        let mut registry = Registry::new();
        registry
            .define("NEWTON_CONSTANT", 6.674_08e-11, Some("m^3/kg/s^2"), "Gravitation", Some(3.1e-15), "CODATA 2014")
            .unwrap();

        let constant = registry.lookup("NEWTON_CONSTANT").unwrap();
        assert_eq!(constant.error, Some(3.1e-15));
        assert_eq!(constant.references.as_slice(), ["CODATA 2014".to_string()]);
    }

    #[test]
    fn test_alias_of_unknown_fails() {
        let mut registry = sample();
        let error = registry.alias("x", "MISSING").unwrap_err();
        assert_eq!(error.name(), "MISSING");
        assert!(!registry.contains("x"));
    }

    #[test]
    fn test_redefinition_overwrites_in_place() {
        let mut registry = sample();
        registry.define("LIFE_UNIVERSE", 43, None, "Off by one", None, None::<&str>).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().next(), Some("LIFE_UNIVERSE"));
        assert_eq!(registry.value("LIFE_UNIVERSE").unwrap(), 43.0);
    }

    #[test]
    fn test_reject_policy() {
        let mut registry = Registry::with_policy(DuplicatePolicy::Reject);
        registry.define("A", 1.0, Some("m"), "first", None, None::<&str>).unwrap();

        let error = registry.define("A", 2.0, Some("m"), "second", None, None::<&str>).unwrap_err();
        assert_eq!(error, RegistryError::Duplicate { name: "A".to_string() });
        assert_eq!(registry.value("A").unwrap(), 1.0);

        assert!(matches!(registry.alias("A", "A"), Err(RegistryError::Duplicate { .. })));
    }

    #[test]
    fn test_derived_value_is_fixed_at_definition() {
        let mut registry = Registry::new();
        registry.define("A", 3.0, None, "a", None, None::<&str>).unwrap();
        registry.define("B", 2.0, None, "b", None, None::<&str>).unwrap();
        let derived = 2.0 * registry.value("A").unwrap() / registry.value("B").unwrap().powi(2);
        registry.define("D", derived, None, "derived", None, None::<&str>).unwrap();

        registry.define("A", 100.0, None, "a again", None, None::<&str>).unwrap();
        assert_eq!(registry.value("D").unwrap(), 1.5);
    }

    #[test]
    fn test_value_of_literal_fails() {
        let registry = sample();
        assert!(matches!(registry.value("TEAPOT"), Err(RegistryError::NotNumeric { .. })));
    }
}
