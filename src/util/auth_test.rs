use std::cell::{Cell, RefCell};

use super::*;

fn login_target() -> RedirectTarget {
    RedirectTarget {
        path: "/login".to_owned(),
        replace: true,
    }
}

#[test]
fn default_config_targets_login_with_history_replace() {
    let config = GuardConfig::default();
    assert_eq!(config.login_path, LOGIN_PATH);
    assert!(config.replace_history);
}

#[test]
fn evaluate_renders_when_authenticated() {
    assert_eq!(evaluate(&|| true, &GuardConfig::default()), GuardOutcome::Render);
}

#[test]
fn evaluate_redirects_when_signed_out() {
    assert_eq!(
        evaluate(&|| false, &GuardConfig::default()),
        GuardOutcome::Redirect(login_target())
    );
}

#[test]
fn evaluate_fails_closed_when_session_check_errors() {
    let session = Fallible(|| -> Result<bool, SessionError> { Err(SessionError::StorageUnavailable) });
    assert_eq!(
        evaluate(&session, &GuardConfig::default()),
        GuardOutcome::Redirect(login_target())
    );
}

#[test]
fn fallible_check_passes_through_ok_values() {
    let session = Fallible(|| -> Result<bool, SessionError> { Ok(true) });
    assert_eq!(evaluate(&session, &GuardConfig::default()), GuardOutcome::Render);
}

#[test]
fn render_returns_children_verbatim_without_navigation() {
    let redirects = RefCell::new(Vec::new());
    let guard = Guard::new(|| true, |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()));

    assert_eq!(guard.render(|| "Dashboard"), Some("Dashboard"));
    assert!(redirects.borrow().is_empty());
}

#[test]
fn render_redirects_to_login_without_rendering_children() {
    let redirects = RefCell::new(Vec::new());
    let rendered = Cell::new(false);
    let guard = Guard::new(|| false, |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()));

    let out = guard.render(|| {
        rendered.set(true);
        "Dashboard"
    });

    assert_eq!(out, None);
    assert!(!rendered.get());
    assert_eq!(*redirects.borrow(), vec![login_target()]);
}

#[test]
fn render_rechecks_session_on_every_pass() {
    let authenticated = Cell::new(true);
    let redirects = RefCell::new(Vec::new());
    let guard = Guard::new(
        || authenticated.get(),
        |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()),
    );

    assert_eq!(guard.render(|| "Dashboard"), Some("Dashboard"));
    assert!(redirects.borrow().is_empty());

    authenticated.set(false);
    assert_eq!(guard.render(|| "Dashboard"), None);
    assert_eq!(*redirects.borrow(), vec![login_target()]);
}

#[test]
fn repeated_renders_with_same_session_agree() {
    let redirects = RefCell::new(Vec::new());
    let signed_in = Guard::new(|| true, |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()));
    for _ in 0..3 {
        assert_eq!(signed_in.evaluate(), GuardOutcome::Render);
        assert_eq!(signed_in.render(|| 1), Some(1));
    }
    assert!(redirects.borrow().is_empty());

    let signed_out = Guard::new(|| false, |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()));
    for _ in 0..3 {
        assert_eq!(signed_out.render(|| 1), None);
    }
    assert_eq!(redirects.borrow().len(), 3);
    assert!(redirects.borrow().iter().all(|t| *t == login_target()));
}

#[test]
fn evaluate_has_no_navigation_side_effect() {
    let calls = Cell::new(0);
    let guard = Guard::new(|| false, |_: &RedirectTarget| calls.set(calls.get() + 1));
    assert_eq!(guard.evaluate(), GuardOutcome::Redirect(login_target()));
    assert_eq!(calls.get(), 0);
}

#[test]
fn custom_config_changes_redirect_target() {
    let redirects = RefCell::new(Vec::new());
    let config = GuardConfig {
        login_path: "/app/login".to_owned(),
        replace_history: false,
    };
    let guard = Guard::with_config(
        || false,
        |t: &RedirectTarget| redirects.borrow_mut().push(t.clone()),
        config.clone(),
    );

    assert_eq!(guard.config(), &config);
    assert_eq!(guard.render(|| ()), None);
    assert_eq!(
        *redirects.borrow(),
        vec![RedirectTarget {
            path: "/app/login".to_owned(),
            replace: false,
        }]
    );
}
