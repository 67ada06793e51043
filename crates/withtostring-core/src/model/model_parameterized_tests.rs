#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Field eligibility matrix
// ============================================================================

#[test_case(Visibility::Public, StorageClass::Instance, true)]
#[test_case(Visibility::Protected, StorageClass::Instance, true)]
#[test_case(Visibility::PackagePrivate, StorageClass::Instance, true)]
#[test_case(Visibility::Private, StorageClass::Instance, false)]
#[test_case(Visibility::Public, StorageClass::Static, false)]
#[test_case(Visibility::Protected, StorageClass::Static, false)]
#[test_case(Visibility::PackagePrivate, StorageClass::Static, false)]
#[test_case(Visibility::Private, StorageClass::Static, false)]
fn FieldDeclaration___is_eligible___depends_on_visibility_and_storage(
    visibility: Visibility,
    storage: StorageClass,
    expected: bool,
) {
    let field = FieldDeclaration::new("f", visibility, storage);

    assert_eq!(
        field.is_eligible(),
        expected,
        "{} {:?} field eligibility",
        visibility,
        storage
    );
}

// ============================================================================
// Qualified name splitting
// ============================================================================

#[test_case("A", "A", None)]
#[test_case("p.A", "A", Some("p"))]
#[test_case("p.q.A", "A", Some("p.q"))]
#[test_case("ru.otus.SimpleDto", "SimpleDto", Some("ru.otus"))]
fn qualified_name___splits_into_simple_and_package(
    qualified: &str,
    simple: &str,
    package: Option<&str>,
) {
    assert_eq!(simple_name_of(qualified), simple);
    assert_eq!(package_name_of(qualified), package);
}

// ============================================================================
// Visibility parsing
// ============================================================================

#[test_case("\"public\"", Visibility::Public)]
#[test_case("\"protected\"", Visibility::Protected)]
#[test_case("\"package_private\"", Visibility::PackagePrivate)]
#[test_case("\"package\"", Visibility::PackagePrivate)]
#[test_case("\"private\"", Visibility::Private)]
fn Visibility___json___parses(json: &str, expected: Visibility) {
    let parsed: Visibility = serde_json::from_str(json).unwrap();

    assert_eq!(parsed, expected);
}
