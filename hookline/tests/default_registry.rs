//! The free-function surface over the shared default registry.
//!
//! Each test runs on its own thread, and the default registry is per thread,
//! so tests here do not observe each other's registrations.

use hookline::{HookFn, Value, args, default_registry};
use std::{cell::RefCell, rc::Rc};

#[test]
fn test_do_action_executes_action() {
    let executed = Rc::new(RefCell::new(false));
    let flag = executed.clone();
    hookline::add_action("test_1", HookFn::new(move |_| *flag.borrow_mut() = true), 10, 1);

    hookline::do_action("test_1", &[]).unwrap();

    assert!(*executed.borrow());
    assert_eq!(hookline::did_action("test_1"), 1);
}

#[test]
fn test_apply_filters_uppercases() {
    hookline::add_filter(
        "test_2",
        HookFn::new(|args| args[0].as_str().unwrap_or_default().to_uppercase()),
        10,
        1,
    );
    let result = hookline::apply_filters("test_2", "hello", &[]).unwrap();
    assert_eq!(result, Value::from("HELLO"));

    assert_eq!(hookline::apply("test_2", "a", &[]).unwrap(), Value::from("A"));
    assert_eq!(hookline::filter("test_2", "b", &[]).unwrap(), Value::from("B"));
}

#[test]
fn test_ref_array_variants() {
    let joined = Rc::new(RefCell::new(String::new()));
    let out = joined.clone();
    hookline::add(
        "pair",
        HookFn::new(move |args| *out.borrow_mut() = format!("{} {}", args[0], args[1])),
        10,
        2,
    );
    hookline::do_action_ref_array("pair", &args!["Hello", "World"]).unwrap();
    assert_eq!(*joined.borrow(), "Hello World");

    hookline::exec("pair", &args!["Bye", "now"]).unwrap();
    assert_eq!(*joined.borrow(), "Bye now");

    hookline::add_filter("wrap", HookFn::new(|args| format!("({})", args[0])), 10, 1);
    assert_eq!(
        hookline::apply_filters_ref_array("wrap", &args!["x"]).unwrap(),
        Value::from("(x)")
    );
}

#[test]
fn test_removal_and_has() {
    let cb = HookFn::new(|_| ());
    hookline::add_action("gone", cb.clone(), 10, 1);
    hookline::add_filter("gone_filter", cb.clone(), 5, 1);
    assert!(hookline::has("gone", Some(&cb)));
    assert!(hookline::has_action("gone", None));
    assert!(hookline::has_filter("gone_filter", Some(&cb)));

    assert!(hookline::remove("gone", &cb, Some(10)));
    assert!(!hookline::remove_action("gone", &cb, None));
    assert!(hookline::remove_filter("gone_filter", &cb, Some(5)));
    assert!(!hookline::has_action("gone", None));

    hookline::add_action("bulk", cb.clone(), 1, 1);
    hookline::add_action("bulk", cb.clone(), 2, 1);
    hookline::remove_all_actions("bulk", Some(1));
    assert!(hookline::has_action("bulk", None));
    hookline::remove_all_filters("bulk", None);
    assert!(!hookline::has_action("bulk", None));
    hookline::add_action("bulk", cb.clone(), 3, 1);
    hookline::remove_all("bulk", None);
    assert!(!hookline::has("bulk", None));
}

#[test]
fn test_introspection_on_default_registry() {
    assert_eq!(hookline::current_action(), None);
    assert_eq!(hookline::current_filter(), None);
    assert!(!hookline::doing_action(None));
    assert!(!hookline::doing_filter(None));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    hookline::add_action(
        "probe",
        HookFn::new(move |_| {
            sink.borrow_mut().push((
                hookline::current_action(),
                hookline::doing_action(Some("probe")),
                hookline::doing_action(Some("nonexistent")),
            ));
        }),
        10,
        1,
    );
    hookline::do_action("probe", &[]).unwrap();

    assert_eq!(*seen.borrow(), vec![(Some("probe".to_string()), true, false)]);
    assert!(!hookline::doing_action(None));
}

#[test]
fn test_fresh_registry_is_isolated_from_default() {
    hookline::add_action("shared_only", HookFn::new(|_| ()), 10, 1);

    let fresh = hookline::Registry::new();
    assert!(!fresh.has_action("shared_only", None));
    assert!(default_registry().has_action("shared_only", None));
}
