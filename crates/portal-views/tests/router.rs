//! Routing table to mounted views.

mod common;

use portal_client::endpoints::paths;
use portal_core::{CoreError, Envelope, Role, Route};
use portal_session::STUDENT_ID_KEY;
use portal_views::{Page, Router, ViewError, ViewState};
use pretty_assertions::assert_eq;
use rstest::rstest;

use common::harness;

#[rstest]
#[case("/", Route::StudentRegistration)]
#[case("/teacher-registration", Route::TeacherRegistration)]
#[case("/student-login", Route::StudentLogin)]
#[case("/teacher-login", Route::TeacherLogin)]
#[tokio::test]
async fn form_routes_mount_without_calls(#[case] path: &str, #[case] route: Route) {
    let h = harness(&[]);
    let page = Router::open(path, h.ctx.clone()).await.expect("known route");

    assert_eq!(page.route(), route);
    assert_eq!(page.state(), None);
    assert_eq!(h.backend.request_count(), 0);
}

#[tokio::test]
async fn dashboard_route_mounts_and_loads() {
    let h = harness(&[(STUDENT_ID_KEY, "S1")]);
    h.backend.respond(
        paths::STUDENT_DETAILS,
        &Envelope::success().with("courses", serde_json::json!([])),
    );

    let page = Router::open("/outer-dashboard", h.ctx.clone())
        .await
        .expect("known route");

    assert!(matches!(page, Page::Outer(_)));
    assert_eq!(page.state(), Some(&ViewState::Ready));
    assert_eq!(h.backend.requests_to(paths::STUDENT_DETAILS).len(), 1);
}

#[tokio::test]
async fn teacher_dashboard_opens_without_guard() {
    let h = harness(&[(STUDENT_ID_KEY, "S1")]);
    let page = Router::open("/teacher-dashboard", h.ctx.clone())
        .await
        .expect("known route");

    let error = page.state().and_then(ViewState::error).cloned();
    assert_eq!(error, Some(ViewError::Unauthenticated { role: Role::Teacher }));
    assert_eq!(
        error.and_then(|e| e.login_route()),
        Some(Route::TeacherLogin)
    );
    assert_eq!(h.backend.request_count(), 0);
}

#[rstest]
#[case("/student-dashboard/")]
#[case("/Teacher-Login")]
#[case("/nowhere")]
#[tokio::test]
async fn unknown_paths_are_rejected(#[case] path: &str) {
    let h = harness(&[]);
    let error = Router::open(path, h.ctx.clone()).await.unwrap_err();
    assert_eq!(error, CoreError::UnknownRoute(path.to_string()));
}

#[tokio::test]
async fn unmounting_a_page_ends_its_lifetime() {
    let h = harness(&[]);
    let page = Router::mount(Route::StudentLogin, h.ctx.clone()).await;
    page.unmount();
    assert!(page.lifetime().has_ended());
}
