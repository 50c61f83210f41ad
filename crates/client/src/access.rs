//! Role-gated route access.
//!
//! Pure decision logic: callers observe the decision and perform the
//! navigation themselves.

use crate::models::SessionUser;

/// Pages of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Staff login.
    Entry,
    /// Admin login.
    AdminEntry,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    History,
    CreateInvestor,
    LogSale,
    Profile,
    ChangePassword,
}

impl Route {
    /// Whether the page is reachable without a session.
    #[must_use]
    pub const fn is_public(self) -> bool {
        matches!(
            self,
            Self::Entry | Self::AdminEntry | Self::ForgotPassword | Self::ResetPassword
        )
    }

    /// URL path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Entry => "/",
            Self::AdminEntry => "/admin/login",
            Self::ForgotPassword => "/forgotpassword",
            Self::ResetPassword => "/resetpassword",
            Self::Dashboard => "/dashboard",
            Self::History => "/history",
            Self::CreateInvestor => "/create-investor",
            Self::LogSale => "/log-sale",
            Self::Profile => "/profile",
            Self::ChangePassword => "/change-password",
        }
    }
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

/// Decide whether the given session may open the given route.
///
/// Unauthenticated access to a gated page redirects to the matching entry
/// point; an authenticated non-staff role redirects to the dashboard.
#[must_use]
pub fn check(route: Route, user: Option<&SessionUser>) -> Access {
    if route.is_public() {
        return Access::Allow;
    }

    let Some(user) = user else {
        return Access::Redirect(Route::Entry);
    };

    if staff_only(route) && !user.role.is_staff() {
        return Access::Redirect(Route::Dashboard);
    }

    Access::Allow
}

const fn staff_only(route: Route) -> bool {
    matches!(
        route,
        Route::Dashboard
            | Route::History
            | Route::CreateInvestor
            | Route::LogSale
            | Route::Profile
            | Route::ChangePassword
    )
}
