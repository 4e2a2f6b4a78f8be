//! A login recorded through one session is visible to the next process.

use std::sync::Arc;

use portal_core::{Identity, Role};
use portal_session::{FileSessionStore, Session, SessionStore};
use pretty_assertions::assert_eq;

#[test]
fn login_survives_reload() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    let mut first = Session::load(Arc::new(FileSessionStore::open(&path).expect("open")));
    first
        .record_login(&Identity::student("S1"))
        .expect("login stored");
    first.select_module("Week 1").expect("module stored");

    let second = Session::load(Arc::new(FileSessionStore::open(&path).expect("reopen")));
    assert_eq!(second.identity(Role::Student), Some(Identity::student("S1")));
    assert_eq!(second.identity(Role::Teacher), None);
    assert_eq!(second.selected_module(), Some("Week 1"));
}

#[test]
fn student_and_teacher_logins_coexist() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let path = tmp.path().join("session.json");

    let mut session = Session::load(Arc::new(FileSessionStore::open(&path).expect("open")));
    session.record_login(&Identity::student("S1")).expect("student");
    session.record_login(&Identity::teacher("T1")).expect("teacher");

    let raw = FileSessionStore::open(&path).expect("reopen").entries();
    assert_eq!(raw.get("studentId").map(String::as_str), Some("S1"));
    assert_eq!(raw.get("teacherId").map(String::as_str), Some("T1"));
}
