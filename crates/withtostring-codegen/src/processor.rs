//! Per-pass orchestration

use crate::detector::overrides_to_string;
use crate::filer::{Filer, write_artifact};
use crate::selector::build_request;
use crate::synthesizer::synthesize;
use withtostring_core::{
    DEFAULT_MARKER, Diagnostic, DiagnosticSink, GeneratorConfig, ProcessingState,
    TypeDeclaration, TypeQuery,
};

/// Result of processing one type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOutcome {
    /// Qualified name of the annotated type
    pub qualified_name: String,

    /// Terminal state reached
    pub state: ProcessingState,

    /// Qualified name of the generated type, when one was produced
    pub artifact: Option<String>,
}

impl TypeOutcome {
    fn discovered(qualified_name: &str) -> Self {
        Self {
            qualified_name: qualified_name.to_string(),
            state: ProcessingState::Discovered,
            artifact: None,
        }
    }

    fn advance(&mut self, next: ProcessingState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(
            type_name = %self.qualified_name,
            from = %self.state,
            to = %next,
            "state transition"
        );
        self.state = next;
    }
}

/// Outcomes of one processing pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub outcomes: Vec<TypeOutcome>,
}

impl PassReport {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn count(&self, pred: impl Fn(ProcessingState) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o.state)).count()
    }

    /// Types whose artifact was written
    pub fn generated(&self) -> usize {
        self.count(|s| s == ProcessingState::Generated)
    }

    /// Types skipped by policy (own `toString()` or no eligible fields)
    pub fn skipped(&self) -> usize {
        self.count(|s| s.is_skipped())
    }

    /// Types whose artifact could not be written
    pub fn failed(&self) -> usize {
        self.count(|s| s == ProcessingState::IoFailure)
    }

    /// Outcome for a given type, if it was part of the pass
    pub fn outcome(&self, qualified_name: &str) -> Option<&TypeOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.qualified_name == qualified_name)
    }
}

/// Reports of every pass in a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub passes: Vec<PassReport>,

    /// True when every allowed pass returned declarations, so the run ended
    /// at the pass limit rather than on an empty pass. The query may still
    /// hold declarations; see [`RunReport::pending`].
    pub hit_pass_limit: bool,

    /// True when the run stopped at the pass limit and the query reported
    /// declarations it had not yet handed out
    pub pending: bool,
}

impl RunReport {
    pub fn generated(&self) -> usize {
        self.passes.iter().map(PassReport::generated).sum()
    }

    pub fn skipped(&self) -> usize {
        self.passes.iter().map(PassReport::skipped).sum()
    }

    pub fn failed(&self) -> usize {
        self.passes.iter().map(PassReport::failed).sum()
    }

    /// All outcomes across passes, in processing order
    pub fn outcomes(&self) -> impl Iterator<Item = &TypeOutcome> {
        self.passes.iter().flat_map(|p| p.outcomes.iter())
    }
}

/// Drives detection, selection, and synthesis for annotated types.
///
/// Holds no state between types or passes; running the same declarations
/// again rewrites identical files.
#[derive(Debug, Clone)]
pub struct Processor {
    marker: String,
    max_passes: usize,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl Processor {
    /// Create a processor for the given marker annotation
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            max_passes: 16,
        }
    }

    /// Create a processor from configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.marker_annotation.clone()).with_max_passes(config.max_passes)
    }

    /// Limit the number of passes [`Processor::run_to_completion`] performs
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Run one processing pass over whatever the query reports as new
    pub fn process_pass<Q, F, S>(&self, query: &mut Q, filer: &mut F, sink: &S) -> PassReport
    where
        Q: TypeQuery + ?Sized,
        F: Filer + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let declarations = query.find_annotated(&self.marker);
        tracing::debug!(
            marker = %self.marker,
            count = declarations.len(),
            "annotated declarations found"
        );

        let outcomes = declarations
            .iter()
            .map(|decl| self.process_type(decl, &mut *filer, sink))
            .collect();

        let report = PassReport { outcomes };
        if !report.is_empty() {
            tracing::info!(
                generated = report.generated(),
                skipped = report.skipped(),
                failed = report.failed(),
                "processing pass complete"
            );
        }
        report
    }

    /// Run passes until the query has nothing new or the pass limit is hit
    pub fn run_to_completion<Q, F, S>(&self, query: &mut Q, filer: &mut F, sink: &S) -> RunReport
    where
        Q: TypeQuery + ?Sized,
        F: Filer + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let mut run = RunReport::default();
        for pass in 1..=self.max_passes {
            let report = self.process_pass(&mut *query, &mut *filer, sink);
            if report.is_empty() {
                return run;
            }
            tracing::debug!(pass, "pass finished");
            run.passes.push(report);
        }
        run.hit_pass_limit = true;
        run.pending = query.has_pending(&self.marker);
        if run.pending {
            tracing::warn!(
                max_passes = self.max_passes,
                "pass limit reached with declarations still pending"
            );
        } else {
            tracing::debug!(max_passes = self.max_passes, "pass limit reached");
        }
        run
    }

    /// Process a single declaration through to a terminal state
    pub fn process_type<F, S>(
        &self,
        declaration: &TypeDeclaration,
        filer: &mut F,
        sink: &S,
    ) -> TypeOutcome
    where
        F: Filer + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let mut outcome = TypeOutcome::discovered(&declaration.qualified_name);

        if overrides_to_string(declaration) {
            outcome.advance(ProcessingState::Overridden);
            sink.report(Diagnostic::already_overridden(&declaration.qualified_name));
            return outcome;
        }

        let Some(request) = build_request(declaration) else {
            outcome.advance(ProcessingState::NoEligibleFields);
            return outcome;
        };
        outcome.advance(ProcessingState::HasFields);

        let artifact = synthesize(&request);
        match write_artifact(filer, &artifact) {
            Ok(()) => {
                outcome.advance(ProcessingState::Generated);
                outcome.artifact = Some(artifact.qualified_name);
            }
            Err(err) => {
                outcome.advance(ProcessingState::IoFailure);
                sink.report(Diagnostic::error(err.file(), err.to_string()));
            }
        }
        outcome
    }
}
