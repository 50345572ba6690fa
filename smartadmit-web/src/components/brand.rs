use crate::i18n::t;
use yew::prelude::*;

/// "uniiq" word mark with the logo image.
#[function_component(Brand)]
pub fn brand() -> Html {
    html! {
        <div class="brand" data-testid="brand">
            <img class="brand-logo" src={crate::paths::logo_src()} alt={t("brand.logo_alt")} width="40" height="40" />
            <span class="brand-prefix">{ t("brand.prefix") }</span>
            <span class="brand-suffix">{ t("brand.suffix") }</span>
        </div>
    }
}
