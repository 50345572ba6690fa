use crate::components::brand::Brand;
use crate::i18n::t;
use smartadmit_core::Major;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeProps {
    #[prop_or_default]
    pub on_start: Callback<()>,
    #[prop_or_default]
    pub on_skip: Callback<()>,
}

/// Full-screen introduction; the only way forward is "Get started".
#[function_component(WelcomeStep)]
pub fn welcome_step(props: &WelcomeProps) -> Html {
    let start = props.on_start.reform(|_: MouseEvent| ());
    let skip = props.on_skip.reform(|_: MouseEvent| ());
    html! {
        <section class="welcome" data-testid="step-welcome">
            <button type="button" class="welcome-skip" onclick={skip} data-testid="welcome-skip">
                { t("welcome.skip") }
            </button>
            <article class="welcome-card">
                <header class="welcome-header">
                    <p class="welcome-kicker">{ t("welcome.kicker") }</p>
                    <h1>{ t("welcome.title") }</h1>
                </header>
                <div class="welcome-body">
                    <Brand />
                    <p class="welcome-intro">{ t("welcome.intro") }</p>
                    <p class="welcome-tagline">{ t("welcome.tagline") }</p>
                    <button type="button" class="btn-primary" onclick={start} data-testid="welcome-start">
                        { t("welcome.start") }
                    </button>
                </div>
                <ul class="welcome-tags" aria-label={t("welcome.featured_label")}>
                    { for Major::FEATURED.iter().map(|major| html! {
                        <li class="tag">{ major.label() }</li>
                    })}
                </ul>
            </article>
        </section>
    }
}
