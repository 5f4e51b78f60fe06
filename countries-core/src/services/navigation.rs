//! Back-navigation contract
//!
//! The router that owns the history lives in the UI; this module only decides
//! which routing primitive the "Back" control should invoke.

/// Destination of a navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Root view listing all countries
    Home,
    /// Detail view of one country, by name (as it would appear in the URL)
    Country(String),
}

impl Route {
    /// Path form of the route, e.g. `/` or `/France`
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Country(name) => format!("/{name}"),
        }
    }
}

/// State attached to a navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    /// Set when the navigation was triggered from inside the application
    pub from: bool,
}

impl NavState {
    pub const fn in_app() -> Self {
        Self { from: true }
    }

    pub const fn direct() -> Self {
        Self { from: false }
    }
}

/// How the user reached the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Arrived through an in-app link; history has somewhere to go back to
    InApp,
    /// Entered directly (startup argument, typed location)
    Direct,
}

impl From<NavState> for NavigationIntent {
    fn from(state: NavState) -> Self {
        if state.from {
            Self::InApp
        } else {
            Self::Direct
        }
    }
}

/// Routing primitives supplied by the host application
pub trait Navigator {
    /// Push a new location
    fn navigate(&mut self, route: Route, state: NavState);

    /// Go back one step in history
    fn navigate_back(&mut self);
}

/// Run the "Back" control.
///
/// In-app arrivals go back one step; direct arrivals go to the root view,
/// marking that navigation so later back-chains stay inside the application.
pub fn go_back(intent: NavigationIntent, navigator: &mut impl Navigator) {
    match intent {
        NavigationIntent::InApp => navigator.navigate_back(),
        NavigationIntent::Direct => navigator.navigate(Route::Home, NavState::in_app()),
    }
}
