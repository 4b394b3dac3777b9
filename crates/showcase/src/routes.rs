/// What a route answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Render the named template.
    Template(&'static str),
    /// Answer `302 Found` pointing at another page.
    Redirect(Page),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Login,
    Register,
    Dashboard,
    Browse,
    Profile,
    ChangePassword,
    CreateSession,
    SessionReports,
    TrainerDashboard,
    TrainerSessions,
    Logout,
    SessionRoom,
}

impl Page {
    pub const ALL: [Page; 13] = [
        Page::Index,
        Page::Login,
        Page::Register,
        Page::Dashboard,
        Page::Browse,
        Page::Profile,
        Page::ChangePassword,
        Page::CreateSession,
        Page::SessionReports,
        Page::TrainerDashboard,
        Page::TrainerSessions,
        Page::Logout,
        Page::SessionRoom,
    ];

    /// Endpoint name, as used by [`url_for`].
    pub fn name(self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Login => "login",
            Page::Register => "register",
            Page::Dashboard => "dashboard",
            Page::Browse => "browse_sessions",
            Page::Profile => "profile",
            Page::ChangePassword => "change_password",
            Page::CreateSession => "create_session",
            Page::SessionReports => "session_reports",
            Page::TrainerDashboard => "trainer_dashboard",
            Page::TrainerSessions => "trainer_sessions",
            Page::Logout => "logout",
            Page::SessionRoom => "session_room",
        }
    }

    /// Router pattern. `SessionRoom` captures the rest of the path, slashes
    /// included.
    pub fn path(self) -> &'static str {
        match self {
            Page::Index => "/",
            Page::Login => "/login",
            Page::Register => "/register",
            Page::Dashboard => "/dashboard",
            Page::Browse => "/browse",
            Page::Profile => "/profile",
            Page::ChangePassword => "/change-password",
            Page::CreateSession => "/create-session",
            Page::SessionReports => "/session-reports",
            Page::TrainerDashboard => "/trainer-dashboard",
            Page::TrainerSessions => "/trainer-sessions",
            Page::Logout => "/logout",
            Page::SessionRoom => "/session/*session_id",
        }
    }

    pub fn target(self) -> Target {
        match self {
            Page::Index => Target::Template("index.html"),
            Page::Login => Target::Template("showcase_login.html"),
            Page::Register => Target::Template("showcase_register.html"),
            Page::Dashboard => Target::Template("dashboard.html"),
            Page::Browse => Target::Template("browse_sessions.html"),
            Page::Profile => Target::Template("showcase_profile.html"),
            Page::ChangePassword => Target::Redirect(Page::Profile),
            Page::CreateSession => Target::Template("showcase_create_session.html"),
            Page::SessionReports => Target::Template("session_reports.html"),
            Page::TrainerDashboard | Page::TrainerSessions => {
                Target::Template("trainer_dashboard.html")
            }
            Page::Logout | Page::SessionRoom => Target::Redirect(Page::Index),
        }
    }

    pub fn template(self) -> Option<&'static str> {
        match self.target() {
            Target::Template(name) => Some(name),
            Target::Redirect(_) => None,
        }
    }

    /// Location a redirecting page points at.
    pub fn redirect_location(self) -> Option<&'static str> {
        match self.target() {
            Target::Redirect(page) => url_for(page.name()),
            Target::Template(_) => None,
        }
    }
}

/// Resolves an endpoint name to its path. Pages whose path captures a
/// parameter have no fixed URL and resolve to `None`.
pub fn url_for(name: &str) -> Option<&'static str> {
    Page::ALL
        .into_iter()
        .find(|page| page.name() == name)
        .map(Page::path)
        .filter(|path| !path.contains('*') && !path.contains(':'))
}
