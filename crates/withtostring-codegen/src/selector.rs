//! Field eligibility filtering

use withtostring_core::{FieldDeclaration, GenerationRequest, TypeDeclaration};

/// Select the fields that appear in the generated representation.
///
/// Keeps instance fields that are not private, in declaration order.
pub fn select_eligible_fields(declaration: &TypeDeclaration) -> Vec<FieldDeclaration> {
    declaration
        .fields
        .iter()
        .filter(|field| field.is_eligible())
        .cloned()
        .collect()
}

/// Build the generation request for a type, or `None` when no field qualifies
pub fn build_request(declaration: &TypeDeclaration) -> Option<GenerationRequest> {
    GenerationRequest::new(
        declaration.qualified_name.clone(),
        select_eligible_fields(declaration),
    )
}
