use tagcase::prelude::*;

fn sample() -> Union {
    Union::new([
        ("Simple", Case::empty()),
        ("One", Case::one()),
        ("Three", Case::three()),
    ])
    .unwrap()
}

#[test]
fn value_accessors() {
    let u = sample();
    let three = u.build("Three", ("x", 1i32, false)).unwrap();

    assert_eq!(three.tag(), "Three");
    assert_eq!(three.arity(), 3);
    assert!(three.is_case("Three"));
    assert!(!three.is_case("One"));

    assert!(three.payload(2).unwrap().is::<bool>());
    assert!(three.payload(3).is_none());
}

#[test]
fn view_spreads_slots_positionally() {
    let u = sample();
    let three = u.build("Three", ("x", 1i32, false)).unwrap();

    let v = three.view();
    assert!(v.is_three());
    assert_eq!(v.arity(), 3);
    assert_eq!(v.get::<&str>(0), Some(&"x"));
    assert_eq!(v.get::<i32>(1), Some(&1));
    assert_eq!(v.get::<bool>(2), Some(&false));
    assert!(v.slot(3).is_none());

    // a downcast to the wrong payload type is absent, not a panic
    assert!(v.get::<i64>(1).is_none());

    let simple = u.build("Simple", ()).unwrap();
    assert!(simple.view().is_empty());
    assert!(simple.view().slot(0).is_none());

    match u.build("One", (7i32,)).unwrap().view() {
        Unpacked::One(p) => assert_eq!(p.downcast_ref::<i32>(), Some(&7)),
        other => panic!("expected a one-payload view, got {:?}", other),
    }
}

#[test]
fn clones_share_the_same_instance() {
    let u = sample();
    let one = u.build("One", (7i32,)).unwrap();
    let alias = one.clone();

    assert!(Value::same(&one, &alias));
    assert!(Payload::same(
        one.payload(0).unwrap(),
        alias.payload(0).unwrap()
    ));
}

#[test]
fn payloads_keep_their_own_identity() {
    let a = Payload::new(5i32);
    let b = Payload::new(5i32);

    assert!(Payload::same(&a, &a.clone()));
    assert!(!Payload::same(&a, &b));
    assert_eq!(a.downcast_ref::<i32>(), b.downcast_ref::<i32>());
}
