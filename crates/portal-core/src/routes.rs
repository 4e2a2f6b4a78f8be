//! Static path → page table.
//!
//! Seven entries, no parameterized segments and no guards: any route can be
//! opened directly. [`Route::required_role`] is informational only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::identity::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    StudentRegistration,
    TeacherRegistration,
    StudentLogin,
    TeacherLogin,
    OuterDashboard,
    StudentDashboard,
    TeacherDashboard,
}

const TABLE: [(&str, Route); 7] = [
    ("/", Route::StudentRegistration),
    ("/teacher-registration", Route::TeacherRegistration),
    ("/student-login", Route::StudentLogin),
    ("/teacher-login", Route::TeacherLogin),
    ("/outer-dashboard", Route::OuterDashboard),
    ("/student-dashboard", Route::StudentDashboard),
    ("/teacher-dashboard", Route::TeacherDashboard),
];

impl Route {
    /// Every route in table order.
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        TABLE.iter().map(|(_, route)| *route)
    }

    /// Exact-match lookup; no trailing-slash or case normalization.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| *route)
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, route)| *route == self)
            .map_or("/", |(path, _)| path)
    }

    /// Identity the page needs to load its data. The router does not enforce it.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::OuterDashboard | Self::StudentDashboard => Some(Role::Student),
            Self::TeacherDashboard => Some(Role::Teacher),
            Self::StudentRegistration
            | Self::TeacherRegistration
            | Self::StudentLogin
            | Self::TeacherLogin => None,
        }
    }

    /// Login page for a role.
    #[must_use]
    pub const fn login_for(role: Role) -> Self {
        match role {
            Role::Student => Self::StudentLogin,
            Role::Teacher => Self::TeacherLogin,
        }
    }

    /// Where a successful login of `role` navigates.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Student => Self::OuterDashboard,
            Role::Teacher => Self::TeacherDashboard,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn table_has_seven_unique_paths() {
        let paths: Vec<_> = Route::all().map(Route::path).collect();
        let mut deduped = paths.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(paths.len(), 7);
        assert_eq!(deduped.len(), 7);
    }

    #[rstest]
    #[case("/", Route::StudentRegistration)]
    #[case("/teacher-registration", Route::TeacherRegistration)]
    #[case("/student-login", Route::StudentLogin)]
    #[case("/teacher-login", Route::TeacherLogin)]
    #[case("/outer-dashboard", Route::OuterDashboard)]
    #[case("/student-dashboard", Route::StudentDashboard)]
    #[case("/teacher-dashboard", Route::TeacherDashboard)]
    fn paths_resolve_both_ways(#[case] path: &str, #[case] route: Route) {
        assert_eq!(Route::from_path(path), Some(route));
        assert_eq!(route.path(), path);
    }

    #[rstest]
    #[case("/student-dashboard/")]
    #[case("/Student-Login")]
    #[case("/student-registration")]
    #[case("")]
    fn lookup_is_exact(#[case] path: &str) {
        assert_eq!(Route::from_path(path), None);
        assert!(matches!(path.parse::<Route>(), Err(CoreError::UnknownRoute(_))));
    }

    #[test]
    fn login_navigates_to_role_home() {
        assert_eq!(Route::home_for(Role::Student), Route::OuterDashboard);
        assert_eq!(Route::home_for(Role::Teacher), Route::TeacherDashboard);
        assert_eq!(Route::login_for(Role::Teacher).path(), "/teacher-login");
    }

    #[test]
    fn only_dashboards_need_identity() {
        let needing: Vec<_> = Route::all()
            .filter(|r| r.required_role().is_some())
            .collect();
        assert_eq!(
            needing,
            vec![
                Route::OuterDashboard,
                Route::StudentDashboard,
                Route::TeacherDashboard
            ]
        );
    }
}
