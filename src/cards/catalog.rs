//! Function catalog for lookup by name.
//!
//! The `FunctionCatalog` stores every function a story map can use.
//! Hosts typically load it once from a JSON resource at startup.

use rustc_hash::FxHashMap;

use super::function::Function;
use crate::error::CatalogError;

/// Catalog of functions keyed by name.
///
/// ## Example
///
/// ```
/// use storymap::cards::{Function, FunctionCatalog};
///
/// let mut catalog = FunctionCatalog::new();
/// catalog.register(Function::new(1, "Absentation"));
///
/// let found = catalog.get("Absentation").unwrap();
/// assert_eq!(found.number(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FunctionCatalog {
    functions: FxHashMap<String, Function>,
}

impl FunctionCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON array of functions.
    ///
    /// A blank or duplicate name is an error.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let functions: Vec<Function> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for function in functions {
            catalog.try_register(function)?;
        }
        tracing::debug!(count = catalog.len(), "loaded function catalog");
        Ok(catalog)
    }

    /// Register a function, failing if its name is already taken.
    pub fn try_register(&mut self, function: Function) -> Result<(), CatalogError> {
        if self.functions.contains_key(function.name()) {
            return Err(CatalogError::DuplicateName(function.name().to_string()));
        }
        self.functions.insert(function.name().to_string(), function);
        Ok(())
    }

    /// Register a function.
    ///
    /// Panics if a function with the same name already exists.
    pub fn register(&mut self, function: Function) {
        if let Err(err) = self.try_register(function) {
            panic!("{err}");
        }
    }

    /// Get a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Get the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// All functions in natural order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Function> {
        let mut functions: Vec<_> = self.functions.values().cloned().collect();
        functions.sort();
        functions
    }

    /// Find functions matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Function>
    where
        F: Fn(&Function) -> bool,
    {
        self.functions.values().filter(move |f| predicate(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = FunctionCatalog::new();
        catalog.register(Function::new(1, "Absentation"));

        assert!(catalog.contains("Absentation"));
        assert_eq!(catalog.get("Absentation").unwrap().number(), 1);
        assert!(catalog.get("Villainy").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = FunctionCatalog::new();
        catalog.register(Function::new(1, "Absentation"));
        catalog.register(Function::new(2, "Absentation"));
    }

    #[test]
    fn test_sorted() {
        let mut catalog = FunctionCatalog::new();
        catalog.register(Function::new(3, "Violation"));
        catalog.register(Function::new(1, "Absentation"));
        catalog.register(Function::new(2, "Interdiction"));

        let numbers: Vec<_> = catalog.sorted().iter().map(Function::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"number": 1, "name": "Absentation", "description": "Someone leaves."},
            {"number": 2, "name": "Interdiction", "image": "/img/interdiction.png"}
        ]"#;
        let catalog = FunctionCatalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Absentation").unwrap().description(), "Someone leaves.");
        assert_eq!(
            catalog.get("Interdiction").unwrap().image().path(),
            "/img/interdiction.png"
        );
    }

    #[test]
    fn test_try_register_duplicate() {
        let mut catalog = FunctionCatalog::new();
        catalog.try_register(Function::new(1, "Absentation")).unwrap();
        let err = catalog.try_register(Function::new(2, "Absentation")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(ref name) if name == "Absentation"));
        assert_eq!(catalog.get("Absentation").unwrap().number(), 1);
    }

    #[test]
    fn test_from_json_rejects_duplicate_name() {
        let json = r#"[{"number": 1, "name": "A"}, {"number": 2, "name": "A"}]"#;
        assert!(matches!(
            FunctionCatalog::from_json(json),
            Err(CatalogError::DuplicateName(ref name)) if name == "A"
        ));
    }

    #[test]
    fn test_from_json_rejects_blank_name() {
        let json = r#"[{"number": 1, "name": "  "}]"#;
        assert!(matches!(FunctionCatalog::from_json(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_find_with_predicate() {
        let mut catalog = FunctionCatalog::new();
        catalog.register(Function::new(1, "Absentation"));
        catalog.register(Function::new(8, "Villainy"));

        let late: Vec<_> = catalog.find(|f| f.number() > 5).collect();
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].name(), "Villainy");
    }
}
