//! Loaded packages and declaration lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::declaration::SourceDeclaration;
use super::label::PackageId;

/// Error when a declaration is missing from a loaded package.
#[derive(Debug, Clone, thiserror::Error)]
#[error("No declaration named {name} in package {package}")]
pub struct DeclarationNotFound {
    /// The package that was searched.
    pub package: PackageId,
    /// The simple name that was not found.
    pub name: String,
}

/// A loaded package: the set of declarations the loading subsystem produced
/// for one package id.
///
/// Declarations are keyed by simple name in a `BTreeMap` for deterministic
/// iteration. Packages are shared read-only with the rest of the engine;
/// declarations hand out as `Arc` clones.
#[derive(Debug, Clone)]
pub struct Package {
    id: PackageId,
    declarations: BTreeMap<String, Arc<SourceDeclaration>>,
}

impl Package {
    /// Create an empty package.
    pub fn new(id: PackageId) -> Self {
        Self {
            id,
            declarations: BTreeMap::new(),
        }
    }

    /// Add a declaration to the package.
    pub fn add_declaration(&mut self, declaration: SourceDeclaration) {
        self.declarations
            .insert(declaration.label().name().to_string(), Arc::new(declaration));
    }

    /// Look up a declaration by simple name.
    pub fn declaration(&self, name: &str) -> Result<Arc<SourceDeclaration>, DeclarationNotFound> {
        self.declarations
            .get(name)
            .cloned()
            .ok_or_else(|| DeclarationNotFound {
                package: self.id.clone(),
                name: name.to_string(),
            })
    }

    /// The package's id.
    pub fn id(&self) -> &PackageId {
        &self.id
    }

    /// Number of declarations in the package.
    pub fn num_declarations(&self) -> usize {
        self.declarations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    #[test]
    fn test_add_and_look_up_declaration() {
        let mut package = Package::new(PackageId::new("tools"));
        package.add_declaration(SourceDeclaration::new(
            Label::parse("//tools:compiler").unwrap(),
            "binary",
        ));

        let declaration = package.declaration("compiler").unwrap();
        assert_eq!(declaration.label().name(), "compiler");
        assert_eq!(package.num_declarations(), 1);
    }

    #[test]
    fn test_missing_declaration_is_an_error() {
        let package = Package::new(PackageId::new("tools"));
        let err = package.declaration("ghost").unwrap_err();
        assert_eq!(err.name, "ghost");
        assert_eq!(err.package, PackageId::new("tools"));
    }
}
