use crate::pages::{landing::LandingPage, not_found::NotFound, questionnaire::QuestionnairePage};
use crate::router::{self, Route};
use smartadmit_core::{GuardDecision, RouteGuard};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;
pub mod test_bridge;

pub use test_bridge::BridgeSlot;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

/// Shell shared by every page; expects to sit inside a router.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let bridge = use_state(BridgeSlot::default);
    test_bridge::use_test_bridge(&bridge);

    html! {
        <ContextProvider<BridgeSlot> context={(*bridge).clone()}>
            <style>{ crate::a11y::visible_focus_css() }</style>
            <div id={crate::a11y::LIVE_REGION_ID} class="sr-only" aria-live="polite"></div>
            <GuardedSwitch />
        </ContextProvider<BridgeSlot>>
    }
}

/// Runs the allow-list guard before handing the route to [`switch`].
#[function_component(GuardedSwitch)]
fn guarded_switch() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let navigator = use_navigator();
    let guard = use_memo((), |()| RouteGuard::default());
    let bridge = use_context::<BridgeSlot>();

    let decision = if router::guard_enabled() {
        guard.check(&route.to_path())
    } else {
        GuardDecision::Pass
    };
    let redirect = !decision.is_pass();

    if let Some(bridge) = &bridge {
        bridge.publish_page(route.page());
    }

    use_effect_with((redirect, route.clone()), move |(redirect, _)| {
        if *redirect && let Some(navigator) = navigator {
            navigator.replace(&Route::Home);
        }
    });

    if redirect {
        return Html::default();
    }
    switch(route)
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::Questionnaire => html! { <QuestionnairePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
