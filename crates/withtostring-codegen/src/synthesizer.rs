//! `<Simple>WithToString` source generation.
//!
//! The generated class extends the original type and overrides `toString()`
//! with a single concatenation expression:
//!
//! ```text
//! package p.q;
//!
//! public class SimpleWithToString extends p.q.Simple {
//!     public String toString() {
//!         return "SimpleWithToString{" + "a=" + this.a + "," + "b=" + this.b + "}";
//!     }
//! }
//! ```
//!
//! Calling it yields `SimpleWithToString{a=<a>,b=<b>}` with fields in the
//! order given.

use withtostring_core::model::{package_name_of, simple_name_of};
use withtostring_core::{ARTIFACT_SUFFIX, GeneratedArtifact, GenerationRequest};

/// Synthesize the artifact for a generation request
pub fn synthesize(request: &GenerationRequest) -> GeneratedArtifact {
    GeneratedArtifact {
        qualified_name: request.artifact_name(),
        body: render_to_string(request.qualified_name(), request.field_names()),
    }
}

/// Render the complete source text for `qualified_name` over `field_names`.
///
/// Pure: the same input always produces byte-identical output.
pub fn render_to_string<I, S>(qualified_name: &str, field_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let class_name = format!("{}{}", simple_name_of(qualified_name), ARTIFACT_SUFFIX);
    let mut code = String::new();

    // Package declaration
    if let Some(package) = package_name_of(qualified_name) {
        code.push_str(&format!("package {package};\n\n"));
    }

    // Class declaration
    code.push_str(&format!(
        "public class {class_name} extends {qualified_name} {{\n"
    ));

    // toString()
    code.push_str("\tpublic String toString() {\n");
    code.push_str(&format!("\t\treturn \"{class_name}{{\""));
    for (i, name) in field_names.into_iter().enumerate() {
        let name = name.as_ref();
        if i > 0 {
            code.push_str(" + \",\"");
        }
        code.push_str(&format!(" + \"{name}=\" + this.{name}"));
    }
    code.push_str(" + \"}\";\n");
    code.push_str("\t}\n");

    code.push_str("}\n");

    code
}

#[cfg(test)]
#[path = "synthesizer/synthesizer_tests.rs"]
mod synthesizer_tests;
