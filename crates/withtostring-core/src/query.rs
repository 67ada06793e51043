//! Discovery of annotated type declarations

use crate::model::TypeDeclaration;
use std::collections::HashSet;

/// Source of annotated declarations for the current processing pass.
///
/// Each call returns only declarations that are new since the previous call;
/// an empty result means there is nothing left to process.
pub trait TypeQuery {
    fn find_annotated(&mut self, marker: &str) -> Vec<TypeDeclaration>;

    /// Whether another call to [`TypeQuery::find_annotated`] could return
    /// something, without consuming it.
    ///
    /// Queries that cannot tell answer `true`.
    fn has_pending(&self, _marker: &str) -> bool {
        true
    }
}

/// Query over a fixed list of declarations.
///
/// A declaration is handed out once. Declarations added later with
/// [`InMemoryQuery::push`] show up in the next pass.
#[derive(Debug, Default, Clone)]
pub struct InMemoryQuery {
    declarations: Vec<TypeDeclaration>,
    delivered: HashSet<String>,
}

impl InMemoryQuery {
    pub fn new(declarations: Vec<TypeDeclaration>) -> Self {
        Self {
            declarations,
            delivered: HashSet::new(),
        }
    }

    /// Add a declaration for a later pass
    pub fn push(&mut self, declaration: TypeDeclaration) {
        self.declarations.push(declaration);
    }

    /// All declarations, delivered or not
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    /// Forget what was delivered so every declaration is new again
    pub fn reset(&mut self) {
        self.delivered.clear();
    }
}

impl TypeQuery for InMemoryQuery {
    fn has_pending(&self, marker: &str) -> bool {
        self.declarations
            .iter()
            .any(|d| d.is_annotated_with(marker) && !self.delivered.contains(&d.qualified_name))
    }

    fn find_annotated(&mut self, marker: &str) -> Vec<TypeDeclaration> {
        let mut found = Vec::new();
        for decl in &self.declarations {
            if !decl.is_annotated_with(marker) {
                continue;
            }
            if self.delivered.insert(decl.qualified_name.clone()) {
                found.push(decl.clone());
            }
        }
        found
    }
}
