#![allow(non_snake_case)]

use super::*;

fn simple_dto() -> TypeDeclaration {
    TypeDeclaration::new("ru.otus.SimpleDto")
        .with_annotation("CustomToString")
        .with_field(FieldDeclaration::new(
            "STATIC",
            Visibility::PackagePrivate,
            StorageClass::Static,
        ))
        .with_field(FieldDeclaration::new(
            "x",
            Visibility::Private,
            StorageClass::Instance,
        ))
        .with_field(FieldDeclaration::public("y"))
        .with_field(FieldDeclaration::public("z"))
}

// TypeDeclaration tests

#[test]
fn TypeDeclaration___simple_name___strips_package() {
    let decl = simple_dto();

    assert_eq!(decl.simple_name(), "SimpleDto");
}

#[test]
fn TypeDeclaration___package_name___returns_prefix() {
    let decl = simple_dto();

    assert_eq!(decl.package_name(), Some("ru.otus"));
}

#[test]
fn TypeDeclaration___unnamed_package___has_no_package_name() {
    let decl = TypeDeclaration::new("TopLevel");

    assert_eq!(decl.package_name(), None);
    assert_eq!(decl.simple_name(), "TopLevel");
}

#[test]
fn TypeDeclaration___declares_method___matches_exact_name() {
    let decl = TypeDeclaration::new("p.A").with_method("toString");

    assert!(decl.declares_method("toString"));
    assert!(!decl.declares_method("tostring"));
    assert!(!decl.declares_method("hashCode"));
}

#[test]
fn TypeDeclaration___is_annotated_with___accepts_simple_marker_name() {
    let decl = simple_dto();

    assert!(decl.is_annotated_with("ru.otus.annotation.CustomToString"));
}

#[test]
fn TypeDeclaration___is_annotated_with___accepts_qualified_annotation() {
    let decl = TypeDeclaration::new("p.A").with_annotation("ru.otus.annotation.CustomToString");

    assert!(decl.is_annotated_with("ru.otus.annotation.CustomToString"));
}

#[test]
fn TypeDeclaration___is_annotated_with___rejects_other_annotations() {
    let decl = TypeDeclaration::new("p.A").with_annotation("Deprecated");

    assert!(!decl.is_annotated_with("ru.otus.annotation.CustomToString"));
}

#[test]
fn TypeDeclaration___fields___keep_declaration_order() {
    let decl = simple_dto();

    let names: Vec<&str> = decl.fields.iter().map(|f| f.name.as_str()).collect();

    assert_eq!(names, vec!["STATIC", "x", "y", "z"]);
}

#[test]
fn TypeDeclaration___from_toml___uses_field_defaults() {
    let toml_str = r#"
        qualified_name = "p.A"
        fields = [{ name = "a" }]
    "#;

    let decl: TypeDeclaration = toml::from_str(toml_str).unwrap();

    assert_eq!(decl.fields[0].visibility, Visibility::PackagePrivate);
    assert_eq!(decl.fields[0].storage, StorageClass::Instance);
    assert!(decl.annotations.is_empty());
    assert!(decl.methods.is_empty());
}

#[test]
fn TypeDeclaration___from_toml___accepts_package_alias() {
    let toml_str = r#"
        qualified_name = "p.A"
        fields = [{ name = "a", visibility = "package", storage = "static" }]
    "#;

    let decl: TypeDeclaration = toml::from_str(toml_str).unwrap();

    assert_eq!(decl.fields[0].visibility, Visibility::PackagePrivate);
    assert_eq!(decl.fields[0].storage, StorageClass::Static);
}

// GenerationRequest tests

#[test]
fn GenerationRequest___empty_fields___returns_none() {
    let request = GenerationRequest::new("p.A", Vec::new());

    assert!(request.is_none());
}

#[test]
fn GenerationRequest___artifact_name___appends_suffix() {
    let request = GenerationRequest::new("p.q.A", vec![FieldDeclaration::public("a")]).unwrap();

    assert_eq!(request.artifact_name(), "p.q.AWithToString");
}

#[test]
fn GenerationRequest___field_names___in_given_order() {
    let request = GenerationRequest::new(
        "A",
        vec![
            FieldDeclaration::public("c"),
            FieldDeclaration::public("a"),
            FieldDeclaration::public("b"),
        ],
    )
    .unwrap();

    let names: Vec<&str> = request.field_names().collect();

    assert_eq!(names, vec!["c", "a", "b"]);
}

// GeneratedArtifact tests

#[test]
fn GeneratedArtifact___relative_path___follows_package() {
    let artifact = GeneratedArtifact {
        qualified_name: "p.q.AWithToString".to_string(),
        body: String::new(),
    };

    assert_eq!(
        artifact.relative_path(),
        std::path::Path::new("p").join("q").join("AWithToString.java")
    );
    assert_eq!(artifact.simple_name(), "AWithToString");
    assert_eq!(artifact.package_name(), Some("p.q"));
}

#[test]
fn GeneratedArtifact___relative_path___unnamed_package_is_bare_file() {
    let artifact = GeneratedArtifact {
        qualified_name: "AWithToString".to_string(),
        body: String::new(),
    };

    assert_eq!(
        artifact.relative_path(),
        std::path::PathBuf::from("AWithToString.java")
    );
}

// Name helper tests

#[test]
fn package_name_of___leading_dot___is_unnamed() {
    assert_eq!(package_name_of(".A"), None);
}
