//! Read-only view of annotated type declarations
//!
//! The host's static-analysis layer builds these values; the generator only
//! reads them. Field and method order is declaration order and is preserved
//! everywhere downstream.

use serde::{Deserialize, Serialize};

/// Suffix appended to the original type name to form the generated type name.
pub const ARTIFACT_SUFFIX: &str = "WithToString";

/// Name of the textual-conversion method the generator synthesizes.
pub const TO_STRING_METHOD: &str = "toString";

/// Field visibility as declared in source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    /// No access modifier (visible within the declaring package)
    #[default]
    #[serde(alias = "package")]
    PackagePrivate,
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::PackagePrivate => write!(f, "package-private"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Whether a field belongs to each instance or to the type itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageClass {
    #[default]
    Instance,
    Static,
}

/// A field declared directly on a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    /// Field name as written in source.
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub storage: StorageClass,
}

impl FieldDeclaration {
    /// Create a field declaration
    pub fn new(name: impl Into<String>, visibility: Visibility, storage: StorageClass) -> Self {
        Self {
            name: name.into(),
            visibility,
            storage,
        }
    }

    /// Shorthand for a public instance field
    pub fn public(name: impl Into<String>) -> Self {
        Self::new(name, Visibility::Public, StorageClass::Instance)
    }

    /// Check whether the field takes part in the generated representation.
    ///
    /// Eligibility depends only on storage class and visibility: instance
    /// fields that are not private.
    pub fn is_eligible(&self) -> bool {
        self.storage == StorageClass::Instance && self.visibility != Visibility::Private
    }
}

/// A class declaration as seen by static analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Package-qualified, dot-separated name (e.g. `p.q.Simple`).
    pub qualified_name: String,

    /// Annotations applied to the declaration, simple or qualified.
    #[serde(default)]
    pub annotations: Vec<String>,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,

    /// Names of methods declared directly on the type (inherited ones excluded).
    #[serde(default)]
    pub methods: Vec<String>,
}

impl TypeDeclaration {
    /// Create a declaration with no annotations, fields, or methods
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add an annotation
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Append a field
    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a directly declared method
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Simple name: everything after the last `.`
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    /// Package name, or `None` for the unnamed package
    pub fn package_name(&self) -> Option<&str> {
        package_name_of(&self.qualified_name)
    }

    /// Check whether a method with this name is declared directly on the type
    pub fn declares_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    /// Check whether the declaration carries the given marker annotation.
    ///
    /// Accepts the qualified marker name as well as its simple name, since
    /// an imported annotation is written without its package.
    pub fn is_annotated_with(&self, marker: &str) -> bool {
        let marker_simple = simple_name_of(marker);
        self.annotations
            .iter()
            .any(|a| a == marker || a == marker_simple)
    }
}

/// Fields chosen for one type, ready for synthesis.
///
/// Only exists when there is at least one field to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    qualified_name: String,
    fields: Vec<FieldDeclaration>,
}

impl GenerationRequest {
    /// Build a request; returns `None` when `fields` is empty
    pub fn new(qualified_name: impl Into<String>, fields: Vec<FieldDeclaration>) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }
        Some(Self {
            qualified_name: qualified_name.into(),
            fields,
        })
    }

    /// Qualified name of the original type
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Selected fields, in declaration order
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    /// Field names, in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Qualified name of the type that will be generated
    pub fn artifact_name(&self) -> String {
        format!("{}{}", self.qualified_name, ARTIFACT_SUFFIX)
    }
}

/// A synthesized source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// `<original qualified name>WithToString`
    pub qualified_name: String,

    /// Complete source text.
    pub body: String,
}

impl GeneratedArtifact {
    pub fn simple_name(&self) -> &str {
        simple_name_of(&self.qualified_name)
    }

    pub fn package_name(&self) -> Option<&str> {
        package_name_of(&self.qualified_name)
    }

    /// Path of the source file relative to an output root, e.g.
    /// `p/q/SimpleWithToString.java`
    pub fn relative_path(&self) -> std::path::PathBuf {
        source_path_for(&self.qualified_name)
    }
}

/// Relative `.java` path for a qualified type name
pub fn source_path_for(qualified_name: &str) -> std::path::PathBuf {
    let mut path = std::path::PathBuf::new();
    if let Some(package) = package_name_of(qualified_name) {
        for segment in package.split('.') {
            path.push(segment);
        }
    }
    path.push(format!("{}.java", simple_name_of(qualified_name)));
    path
}

/// Everything after the last `.` (the whole string when there is none)
pub fn simple_name_of(qualified_name: &str) -> &str {
    match qualified_name.rfind('.') {
        Some(idx) => &qualified_name[idx + 1..],
        None => qualified_name,
    }
}

/// Everything before the last `.`, if that `.` is not the first character
pub fn package_name_of(qualified_name: &str) -> Option<&str> {
    match qualified_name.rfind('.') {
        Some(idx) if idx > 0 => Some(&qualified_name[..idx]),
        _ => None,
    }
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;

#[cfg(test)]
#[path = "model/model_parameterized_tests.rs"]
mod model_parameterized_tests;
