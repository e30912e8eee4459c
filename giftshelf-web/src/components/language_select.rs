use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

#[function_component(LanguageSelect)]
pub fn language_select(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <div class="lang-select">
            <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
            <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                { for locales().iter().map(|meta| html! {
                    <option value={meta.code} selected={meta.code == p.current_lang.as_str()}>
                        { meta.name }
                    </option>
                }) }
            </select>
        </div>
    }
}
