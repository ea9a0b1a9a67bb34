use tagcase::name::{RESERVED_NAMES, is_reserved};
use tagcase::prelude::*;

#[test]
fn rejects_reserved_case_names() {
    for name in RESERVED_NAMES {
        assert!(is_reserved(name));
        let err = Union::new([(name, Case::empty())]).unwrap_err();
        assert_eq!(
            err,
            UnionError::ReservedCaseName {
                name: name.to_string()
            }
        );
    }
    assert!(!is_reserved("Just"));
}

#[test]
fn rejects_duplicate_case_names() {
    let err = Union::new([("A", Case::empty()), ("A", Case::one())]).unwrap_err();
    assert_eq!(
        err,
        UnionError::DuplicateCaseName {
            name: "A".to_string()
        }
    );
}

#[test]
fn registers_cases_in_declaration_order() {
    let u = Union::new([
        ("Simple", Case::empty()),
        ("Const", Case::constant(3i32)),
        ("One", Case::one()),
        ("Two", Case::two()),
        ("Three", Case::three()),
    ])
    .unwrap();

    let names: Vec<_> = u.ctors().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["Simple", "Const", "One", "Two", "Three"]);
    assert_eq!(u.len(), 5);
    assert!(!u.is_empty());

    assert!(u.contains("Two"));
    assert!(!u.contains("Zap"));
    assert!(u.ctor("Zap").is_none());
    assert!(u.build("Zap", ()).is_none());
    assert!(u.ctor("Three").unwrap().case().is_three());
}

#[test]
fn case_shape_metadata() {
    assert_eq!(Case::empty().payload_count(), 0);
    assert_eq!(Case::constant(3i32).payload_count(), 1);
    assert_eq!(Case::one().payload_count(), 1);
    assert_eq!(Case::two().payload_count(), 2);
    assert_eq!(Case::three().payload_count(), 3);

    assert!(Case::empty().is_memoized());
    assert!(Case::constant("fixed").is_memoized());
    assert!(!Case::one().is_memoized());

    assert!(Case::constant(3i32).is_single_data());
    assert!(!Case::two().is_single_data());
    assert!(!Case::three().is_single_data());

    // the generic placeholder declares a one-payload case
    assert!(Case::from(Generic).is_one());

    // shape tags are data-free: a constant case and its payload contents
    // collapse to the same tag, and tags order by declaration
    assert_eq!(Case::constant(3i32).shape(), CaseShape::Const);
    assert_eq!(Case::constant("other").shape(), CaseShape::Const);
    assert_eq!(Case::empty().shape(), CaseShape::Empty);
    assert!(CaseShape::Empty < CaseShape::Three);
}
