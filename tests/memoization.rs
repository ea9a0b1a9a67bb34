use tagcase::prelude::*;

fn sample() -> Union {
    Union::new([
        ("Simple", Case::empty()),
        ("Const", Case::constant(3i32)),
        ("One", Case::one()),
        ("Two", Case::two()),
        ("Three", Case::three()),
    ])
    .unwrap()
}

#[test]
fn empty_and_const_cases_memoize_their_value() {
    let u = sample();

    let a = u.build("Simple", ()).unwrap();
    let b = u.build("Simple", ()).unwrap();
    assert!(Value::same(&a, &b));

    let c = u.build("Const", ()).unwrap();
    let d = u.build("Const", ()).unwrap();
    assert!(Value::same(&c, &d));
    assert_eq!(c.payload(0).unwrap().downcast_ref::<i32>(), Some(&3));
}

#[test]
fn payload_cases_build_a_fresh_value_per_call() {
    let u = sample();

    let a = u.build("One", ("one",)).unwrap();
    let b = u.build("One", ("one",)).unwrap();
    assert!(!Value::same(&a, &b));

    let a = u.build("Two", ("two", 2i32)).unwrap();
    let b = u.build("Two", ("two", 2i32)).unwrap();
    assert!(!Value::same(&a, &b));

    let a = u.build("Three", ("x", 1i32, true)).unwrap();
    let b = u.build("Three", ("x", 1i32, true)).unwrap();
    assert!(!Value::same(&a, &b));
}

#[test]
fn const_payload_handle_is_shared_with_the_descriptor() {
    let u = sample();

    let a = u.build("Const", ()).unwrap();
    let b = u.build("Const", ()).unwrap();
    assert!(Payload::same(
        a.payload(0).unwrap(),
        b.payload(0).unwrap()
    ));
}

#[test]
fn memoized_constructors_ignore_stray_arguments() {
    let u = sample();

    let a = u.ctor("Simple").unwrap().call(("ignored",));
    let b = u.build("Simple", ()).unwrap();
    assert!(Value::same(&a, &b));
    assert_eq!(a.arity(), 0);

    let c = u.ctor("Const").unwrap().call((1i32, 2i32));
    assert_eq!(c.arity(), 1);
    assert_eq!(c.payload(0).unwrap().downcast_ref::<i32>(), Some(&3));
}

#[test]
fn generic_factory_memoizes_constants_across_instantiations() {
    let g = Union::generic(|t| {
        [
            ("Val", t.into()),
            ("Nope", Case::constant(())),
            ("Void", Case::empty()),
        ]
    })
    .unwrap();

    // payload-carrying case: never the same reference
    let a = g.build("Val", (1i32,)).unwrap();
    let b = g.build("Val", (1i32,)).unwrap();
    assert!(!Value::same(&a, &b));

    // memoized cases: one instance regardless of the payload type in play
    assert!(Value::same(
        &g.build("Nope", ()).unwrap(),
        &g.build("Nope", ()).unwrap()
    ));
    assert!(Value::same(
        &g.build("Void", ()).unwrap(),
        &g.build("Void", ()).unwrap()
    ));

    // the generic case accepts a different payload type on the next call
    let s = g.build("Val", ("str",)).unwrap();
    assert_eq!(g.if_case("Val", &s, |v| v.get::<&str>(0).is_some()), Some(true));
}

#[test]
#[should_panic(expected = "expects 1 payload value")]
fn wrong_tuple_width_aborts() {
    let u = sample();
    let _ = u.ctor("One").unwrap().call(("a", 1i32));
}
