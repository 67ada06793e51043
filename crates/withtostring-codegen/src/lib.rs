//! withtostring-codegen - Decision and synthesis engine
//!
//! For every declaration carrying the marker annotation, the [`Processor`]
//! decides whether to generate a `<Simple>WithToString` subclass and, if so,
//! writes it through a [`Filer`].
//!
//! # Pipeline
//!
//! ```text
//! TypeQuery::find_annotated
//!     ↓
//!  [detector]     declares toString()? → WARNING, skip
//!     ↓
//!  [selector]     no instance, non-private fields? → skip silently
//!     ↓
//!  [synthesizer]  GenerationRequest → GeneratedArtifact (pure text)
//!     ↓
//!  [filer]        create + write; failure → ERROR, skip
//! ```
//!
//! Each type is processed independently; a skip or failure never affects
//! the other types in the pass.
//!
//! # Example
//!
//! ```
//! use withtostring_codegen::{MemoryFiler, Processor};
//! use withtostring_core::{CollectingSink, FieldDeclaration, InMemoryQuery, TypeDeclaration};
//!
//! let decl = TypeDeclaration::new("p.Point")
//!     .with_annotation("CustomToString")
//!     .with_field(FieldDeclaration::public("x"))
//!     .with_field(FieldDeclaration::public("y"));
//!
//! let mut query = InMemoryQuery::new(vec![decl]);
//! let mut filer = MemoryFiler::new();
//! let sink = CollectingSink::new();
//!
//! let report = Processor::default().process_pass(&mut query, &mut filer, &sink);
//!
//! assert_eq!(report.generated(), 1);
//! assert!(filer.get("p.PointWithToString").is_some());
//! ```

pub mod detector;
pub mod filer;
pub mod processor;
pub mod selector;
pub mod synthesizer;

pub use detector::overrides_to_string;
pub use filer::{DirectoryFiler, Filer, MemoryFiler, SourceFile, write_artifact};
pub use processor::{PassReport, Processor, RunReport, TypeOutcome};
pub use selector::{build_request, select_eligible_fields};
pub use synthesizer::{render_to_string, synthesize};
