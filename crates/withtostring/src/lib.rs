//! # withtostring
//!
//! Generates a `<Type>WithToString` Java subclass for every class carrying the
//! `@CustomToString` marker annotation. The generated subclass overrides
//! `toString()` to print the type's non-private instance fields.
//!
//! A type is skipped with a warning when it already declares `toString()`,
//! and silently when it has no eligible fields.
//!
//! ## Quick Start
//!
//! ```
//! use withtostring::prelude::*;
//!
//! let dto = TypeDeclaration::new("ru.otus.SimpleDto")
//!     .with_annotation("CustomToString")
//!     .with_field(FieldDeclaration::public("y"))
//!     .with_field(FieldDeclaration::new("z", Visibility::PackagePrivate, StorageClass::Instance));
//!
//! let mut query = InMemoryQuery::new(vec![dto]);
//! let mut filer = MemoryFiler::new();
//! let sink = CollectingSink::new();
//!
//! let report = Processor::default().run_to_completion(&mut query, &mut filer, &sink);
//!
//! assert_eq!(report.generated(), 1);
//! assert!(filer.get("ru.otus.SimpleDtoWithToString").is_some());
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`withtostring_core`] - Declaration model, diagnostics, states, config
//! - [`withtostring_codegen`] - Detection, selection, synthesis, and the pass driver
//! - [`withtostring_logging`] - Tracing setup and the tracing-backed diagnostic sink

// Re-export core types
pub use withtostring_core::{
    ARTIFACT_SUFFIX, CollectingSink, ConfigError, DEFAULT_MARKER, Diagnostic, DiagnosticSink,
    FieldDeclaration, GeneratedArtifact, GenerationError, GenerationRequest, GenerationResult,
    GeneratorConfig, InMemoryQuery, LogLevel, ProcessingState, Severity, StorageClass,
    TO_STRING_METHOD, TypeDeclaration, TypeQuery, Visibility,
};

// Re-export the generator
pub use withtostring_codegen::{
    DirectoryFiler, Filer, MemoryFiler, PassReport, Processor, RunReport, SourceFile,
    TypeOutcome, build_request, overrides_to_string, render_to_string, select_eligible_fields,
    synthesize, write_artifact,
};

// Re-export logging
pub use withtostring_logging::{ReloadHandle, TracingSink, init_logging};

pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use withtostring::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        CollectingSink, Diagnostic, DiagnosticSink, DirectoryFiler, FieldDeclaration, Filer,
        GeneratorConfig, InMemoryQuery, LogLevel, MemoryFiler, ProcessingState, Processor,
        Severity, StorageClass, TracingSink, TypeDeclaration, TypeQuery, Visibility,
    };
}
