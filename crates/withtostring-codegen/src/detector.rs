//! Detection of user-authored `toString()` methods

use withtostring_core::{TO_STRING_METHOD, TypeDeclaration};

/// Check whether the type declares `toString()` itself.
///
/// Only methods declared directly on the type count; an inherited
/// `toString()` does not stop generation.
pub fn overrides_to_string(declaration: &TypeDeclaration) -> bool {
    declaration.declares_method(TO_STRING_METHOD)
}
