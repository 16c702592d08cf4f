//! Fire counts and "what is running" queries, including nesting.

use hookline::{HookFn, Registry, testing::OrderLog};
use std::{cell::RefCell, rc::Rc};

mod common;
use common::{Observation, observe, observer};

#[test]
fn test_did_action_counts_every_fire() {
    let hooks = Registry::new();
    hooks.add_action("tick", HookFn::new(|_| ()), 10, 1);
    assert_eq!(hooks.did_action("tick"), 0);

    hooks.do_action("tick", &[]).unwrap();
    hooks.do_action("tick", &[]).unwrap();
    hooks.do_action_ref_array("tick", &[]).unwrap();

    assert_eq!(hooks.did_action("tick"), 3);
    assert_eq!(hooks.did_action("tick_nonexistent"), 0);
}

#[test]
fn test_did_action_counts_fires_with_no_callbacks_left() {
    let hooks = Registry::new();
    hooks.add_action("drained", HookFn::new(|_| ()), 10, 1);
    hooks.remove_all_actions("drained", None);

    hooks.do_action("drained", &[]).unwrap();
    assert_eq!(hooks.did_action("drained"), 1);
}

#[test]
fn test_current_action_only_during_fire() {
    let hooks = Registry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    assert_eq!(hooks.current_action(), None);

    hooks.add_action("test_11", observer(hooks.downgrade(), log.clone()), 10, 1);
    hooks.do_action("test_11", &[]).unwrap();

    assert_eq!(hooks.current_action(), None);
    assert_eq!(
        *log.borrow(),
        vec![Observation {
            current_action: Some("test_11".to_string()),
            current_filter: None,
            doing_any_action: true,
            doing_any_filter: false,
        }]
    );
}

#[test]
fn test_nested_actions_report_innermost_and_both_running() {
    let hooks = Registry::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let weak = hooks.downgrade();
    let inner_seen = seen.clone();
    hooks.add_action(
        "inner",
        HookFn::new(move |_| {
            if let Some(hooks) = weak.upgrade() {
                inner_seen.borrow_mut().push((
                    hooks.current_action(),
                    hooks.doing_action(Some("outer")),
                    hooks.doing_action(Some("inner")),
                ));
            }
        }),
        10,
        1,
    );

    let weak = hooks.downgrade();
    let outer_seen = seen.clone();
    hooks.add_action(
        "outer",
        HookFn::new(move |_| {
            let Some(hooks) = weak.upgrade() else {
                return Ok(());
            };
            hooks.do_action("inner", &[])?;
            outer_seen.borrow_mut().push((
                hooks.current_action(),
                hooks.doing_action(Some("outer")),
                hooks.doing_action(Some("inner")),
            ));
            Ok::<_, hookline::HookError>(())
        }),
        10,
        1,
    );

    hooks.do_action("outer", &[]).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            (Some("inner".to_string()), true, true),
            (Some("outer".to_string()), true, false),
        ]
    );
    assert_eq!(hooks.current_action(), None);
    assert!(!hooks.doing_action(None));
}

#[test]
fn test_current_filter_absent_inside_action_until_filter_runs() {
    let hooks = Registry::new();
    let filter_log = Rc::new(RefCell::new(Vec::new()));
    hooks.add_filter("test_12_filter", observer(hooks.downgrade(), filter_log.clone()), 10, 1);

    let action_log = Rc::new(RefCell::new(Vec::new()));
    let weak = hooks.downgrade();
    let log = action_log.clone();
    hooks.add_action(
        "test_12_action",
        HookFn::new(move |_| {
            let Some(hooks) = weak.upgrade() else {
                return Ok(());
            };
            log.borrow_mut().push(observe(&hooks));
            hooks.apply_filters("test_12_filter", "", &[])?;
            log.borrow_mut().push(observe(&hooks));
            Ok::<_, hookline::HookError>(())
        }),
        10,
        1,
    );

    hooks.do_action("test_12_action", &[]).unwrap();

    let inside_action = Observation {
        current_action: Some("test_12_action".to_string()),
        current_filter: None,
        doing_any_action: true,
        doing_any_filter: false,
    };
    assert_eq!(*action_log.borrow(), vec![inside_action.clone(), inside_action]);
    assert_eq!(
        *filter_log.borrow(),
        vec![Observation {
            current_action: Some("test_12_action".to_string()),
            current_filter: Some("test_12_filter".to_string()),
            doing_any_action: true,
            doing_any_filter: true,
        }]
    );
}

#[test]
fn test_doing_filter_reports_status() {
    let hooks = Registry::new();
    assert!(!hooks.doing_filter(None));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let weak = hooks.downgrade();
    let sink = seen.clone();
    hooks.add_filter(
        "test_14",
        HookFn::new(move |args| {
            if let Some(hooks) = weak.upgrade() {
                sink.borrow_mut().push((
                    hooks.doing_filter(None),
                    hooks.doing_filter(Some("test_14")),
                    hooks.doing_filter(Some("nonexistent")),
                ));
            }
            args[0].clone()
        }),
        10,
        1,
    );

    hooks.apply_filters("test_14", "", &[]).unwrap();
    assert_eq!(*seen.borrow(), vec![(true, true, false)]);
    assert!(!hooks.doing_filter(None));
}

#[test]
fn test_recursive_action_nests_same_name() {
    let hooks = Registry::new();
    let log = OrderLog::new();
    let weak = hooks.downgrade();
    let depth_log = log.clone();
    hooks.add_action(
        "recurse",
        HookFn::new(move |args| {
            let remaining = args[0].as_i64().unwrap_or_default();
            let Some(hooks) = weak.upgrade() else {
                return Ok(());
            };
            depth_log.push(format!("depth {}", hooks.action_depth()));
            if remaining > 0 {
                hooks.do_action("recurse", &hookline::args![remaining - 1])?;
            }
            Ok::<_, hookline::HookError>(())
        }),
        10,
        1,
    );

    hooks.do_action("recurse", &hookline::args![2]).unwrap();

    assert_eq!(log.entries(), vec!["depth 1", "depth 2", "depth 3"]);
    assert_eq!(hooks.did_action("recurse"), 3);
    assert_eq!(hooks.action_depth(), 0);
}
