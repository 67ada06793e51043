#![allow(non_snake_case)]

use super::*;
use withtostring_core::FieldDeclaration;

#[test]
fn render_to_string___simple_dto___matches_expected_source() {
    let code = render_to_string("ru.otus.SimpleDto", ["y", "z"]);

    assert_eq!(
        code,
        "package ru.otus;\n\
         \n\
         public class SimpleDtoWithToString extends ru.otus.SimpleDto {\n\
         \tpublic String toString() {\n\
         \t\treturn \"SimpleDtoWithToString{\" + \"y=\" + this.y + \",\" + \"z=\" + this.z + \"}\";\n\
         \t}\n\
         }\n"
    );
}

#[test]
fn render_to_string___unnamed_package___has_no_package_line() {
    let code = render_to_string("TopLevel", ["a"]);

    assert!(!code.contains("package"));
    assert!(code.starts_with("public class TopLevelWithToString extends TopLevel {\n"));
}

#[test]
fn render_to_string___nested_package___declares_full_package() {
    let code = render_to_string("p.q.A", ["a"]);

    assert!(code.starts_with("package p.q;\n\n"));
    assert!(code.contains("public class AWithToString extends p.q.A {"));
}

#[test]
fn render_to_string___single_field___has_no_separator() {
    let code = render_to_string("p.A", ["only"]);

    assert!(code.contains("return \"AWithToString{\" + \"only=\" + this.only + \"}\";"));
    assert!(!code.contains("\",\""));
}

#[test]
fn render_to_string___three_fields___comma_between_each_pair() {
    let code = render_to_string("p.A", ["a", "b", "c"]);

    assert!(code.contains(
        "\"a=\" + this.a + \",\" + \"b=\" + this.b + \",\" + \"c=\" + this.c + \"}\""
    ));
    assert_eq!(code.matches("\",\"").count(), 2);
}

#[test]
fn render_to_string___field_order___follows_input() {
    let code = render_to_string("p.A", ["a", "b", "c"]);

    let a = code.find("this.a").unwrap();
    let b = code.find("this.b").unwrap();
    let c = code.find("this.c").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn render_to_string___same_input___byte_identical() {
    let first = render_to_string("p.A", ["x", "y"]);
    let second = render_to_string("p.A", ["x", "y"]);

    assert_eq!(first, second);
}

#[test]
fn render_to_string___braces_are_balanced() {
    let code = render_to_string("p.A", ["x", "y"]);
    let outside_literals: String = code.split('"').step_by(2).collect();

    assert_eq!(
        outside_literals.matches('{').count(),
        outside_literals.matches('}').count()
    );
}

#[test]
fn synthesize___names_artifact_after_original() {
    let request = GenerationRequest::new(
        "ru.otus.SimpleDto",
        vec![FieldDeclaration::public("y"), FieldDeclaration::public("z")],
    )
    .unwrap();

    let artifact = synthesize(&request);

    assert_eq!(artifact.qualified_name, "ru.otus.SimpleDtoWithToString");
    assert_eq!(artifact.simple_name(), "SimpleDtoWithToString");
    assert_eq!(artifact.body, render_to_string("ru.otus.SimpleDto", ["y", "z"]));
}
