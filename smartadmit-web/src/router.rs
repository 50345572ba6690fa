use smartadmit_core::Page;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/questionnaire")]
    Questionnaire,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home => Page::Landing,
            Self::Questionnaire => Page::Questionnaire,
            Self::NotFound => Page::NotFound,
        }
    }
}

/// Whether the allow-list guard is active for this build.
///
/// Builds with `SMARTADMIT_OPEN_ROUTES=1` let unknown paths reach the not-found page.
#[must_use]
pub fn guard_enabled() -> bool {
    !matches!(option_env!("SMARTADMIT_OPEN_ROUTES"), Some("1"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_pages() {
        assert_eq!(Route::Home.page(), Page::Landing);
        assert_eq!(Route::Questionnaire.page(), Page::Questionnaire);
        assert_eq!(Route::NotFound.page(), Page::NotFound);
    }

    #[test]
    fn route_paths_agree_with_core_classification() {
        for route in [Route::Home, Route::Questionnaire] {
            assert_eq!(Page::for_path(&route.to_path()), route.page());
        }
        assert_eq!(Route::recognize("/questionnaire"), Some(Route::Questionnaire));
        assert_eq!(Route::recognize("/somewhere"), Some(Route::NotFound));
    }

    #[test]
    fn guard_is_on_by_default() {
        assert!(guard_enabled());
    }
}
