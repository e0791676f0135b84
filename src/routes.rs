#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Main,
    Login,
    Signup,
    NotFound,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Main => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Main => "Portfolio",
            Route::Login => "Log In",
            Route::Signup => "Sign Up",
            Route::NotFound => "Not Found",
        }
    }
}

/// An in-page section of the main route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }

    /// Link that works from any route, not just the main page.
    pub fn href(&self) -> String {
        format!("/#{}", self.id)
    }
}

pub const SECTIONS: [Section; 5] = [
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "tasks",
        label: "Tasks",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_and_titles() {
        assert_eq!(Route::Main.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Signup.path(), "/signup");
        assert_eq!(Route::Login.title(), "Log In");
        assert_eq!(Route::NotFound.title(), "Not Found");
    }

    #[test]
    fn test_section_links() {
        assert_eq!(SECTIONS[0].anchor(), "#home");
        assert_eq!(SECTIONS[2].href(), "/#projects");
        let ids = SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "projects", "tasks", "contact"]);
    }
}
