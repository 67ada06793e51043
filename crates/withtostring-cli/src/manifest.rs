//! Declaration manifest parsing and validation
//!
//! A manifest stands in for the compiler's static analysis: it lists the
//! type declarations the generator should see, in declaration order.

use crate::generate::{GenerateArgs, resolve_config};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use withtostring_codegen::{build_request, overrides_to_string};
use withtostring_core::{InMemoryQuery, TypeDeclaration};

/// Errors raised while loading or validating a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Manifest declares no types")]
    Empty,

    #[error("Invalid type name: {0:?}")]
    InvalidTypeName(String),

    #[error("Invalid field name {field:?} in {type_name}")]
    InvalidFieldName { type_name: String, field: String },

    #[error("Duplicate type: {0}")]
    DuplicateType(String),

    #[error("Duplicate field {field} in {type_name}")]
    DuplicateField { type_name: String, field: String },
}

/// Declaration manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclarationManifest {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

impl DeclarationManifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        content.parse()
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.types.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen_types = HashSet::new();
        for decl in &self.types {
            if !is_qualified_identifier(&decl.qualified_name) {
                return Err(ManifestError::InvalidTypeName(decl.qualified_name.clone()));
            }
            if !seen_types.insert(decl.qualified_name.as_str()) {
                return Err(ManifestError::DuplicateType(decl.qualified_name.clone()));
            }

            let mut seen_fields = HashSet::new();
            for field in &decl.fields {
                if !is_identifier(&field.name) {
                    return Err(ManifestError::InvalidFieldName {
                        type_name: decl.qualified_name.clone(),
                        field: field.name.clone(),
                    });
                }
                if !seen_fields.insert(field.name.as_str()) {
                    return Err(ManifestError::DuplicateField {
                        type_name: decl.qualified_name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Turn the manifest into a query that reports each declaration once
    pub fn into_query(self) -> InMemoryQuery {
        InMemoryQuery::new(self.types)
    }
}

impl std::str::FromStr for DeclarationManifest {
    type Err = ManifestError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

/// Java keywords and literals, which cannot name a type, package, or field
const RESERVED_WORDS: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Check if a string is a single Java identifier
fn is_identifier(name: &str) -> bool {
    if RESERVED_WORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Check if a string is a dot-separated sequence of identifiers
fn is_qualified_identifier(name: &str) -> bool {
    name.split('.').all(is_identifier)
}

/// What `generate` would do with one declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    NotAnnotated,
    AlreadyOverridden,
    NoEligibleFields,
    Generate { artifact: String, fields: Vec<String> },
}

/// Decide the fate of a declaration without writing anything
pub fn decide(declaration: &TypeDeclaration, marker: &str) -> Decision {
    if !declaration.is_annotated_with(marker) {
        return Decision::NotAnnotated;
    }
    if overrides_to_string(declaration) {
        return Decision::AlreadyOverridden;
    }
    match build_request(declaration) {
        Some(request) => Decision::Generate {
            artifact: request.artifact_name(),
            fields: request.field_names().map(str::to_string).collect(),
        },
        None => Decision::NoEligibleFields,
    }
}

/// Write one line per declaration describing what `generate` would do
pub fn describe(
    manifest: &DeclarationManifest,
    marker: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    for decl in &manifest.types {
        match decide(decl, marker) {
            Decision::NotAnnotated => {
                writeln!(out, "  - {} (not annotated)", decl.qualified_name)?
            }
            Decision::AlreadyOverridden => writeln!(
                out,
                "  ! {} (toString() already overridden, skipped)",
                decl.qualified_name
            )?,
            Decision::NoEligibleFields => writeln!(
                out,
                "  - {} (no eligible fields, skipped)",
                decl.qualified_name
            )?,
            Decision::Generate { artifact, fields } => writeln!(
                out,
                "  + {} -> {} [{}]",
                decl.qualified_name,
                artifact,
                fields.join(", ")
            )?,
        }
    }
    Ok(())
}

/// Check command implementation.
///
/// The marker is resolved like `generate` resolves it: `--marker`, then the
/// config file, then the default.
pub fn check(manifest_path: &Path, marker: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(&GenerateArgs {
        manifest: manifest_path.to_path_buf(),
        marker,
        config,
        ..Default::default()
    })?;
    let marker = config.marker_annotation;

    println!("Checking manifest: {}", manifest_path.display());

    let manifest = DeclarationManifest::from_file(manifest_path)?;
    manifest.validate()?;

    println!("✓ Types: {}", manifest.types.len());
    println!("✓ Marker: {}", marker);
    println!();

    describe(&manifest, &marker, &mut std::io::stdout().lock())?;

    println!("\nManifest is valid!");

    Ok(())
}
