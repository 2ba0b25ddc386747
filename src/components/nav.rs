use yew::prelude::*;

use crate::content::PROFILE;
use crate::section::{NavTarget, SectionId};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Option<SectionId>,
    pub on_navigate: Callback<NavTarget>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, on_navigate } = props;

    html! {
        <header class="page-header">
            <h1>{PROFILE.name}</h1>
            <h2>{PROFILE.role}</h2>
            <ul class="teaser-links">
                { for NavTarget::ALL.into_iter().map(|target| {
                    let onclick = {
                        let on_navigate = on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
                    };
                    html! {
                        <li key={target.label()}>
                            <button
                                type="button"
                                class={classes!("teaser-links__link", target.is_active(*active).then(|| "active"))}
                                {onclick}
                            >
                                {target.label()}
                            </button>
                        </li>
                    }
                }) }
            </ul>
            <style>
                {r#"
                .page-header {
                    position: sticky;
                    top: 0;
                    padding: 3rem 0 1.5rem;
                    background: #ffffff;
                    z-index: 10;
                }
                .page-header h1 {
                    margin: 0;
                    font-size: 2.6rem;
                    color: #213547;
                }
                .page-header h2 {
                    margin: 0.4rem 0 1.5rem;
                    font-size: 1.2rem;
                    font-weight: 400;
                    color: #4a5b6c;
                }
                .teaser-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .teaser-links__link {
                    background: none;
                    border: none;
                    padding: 0 0 0.2rem;
                    font: inherit;
                    color: #7b8794;
                    cursor: pointer;
                    border-bottom: 2px solid transparent;
                    transition: color 0.2s ease, border-color 0.2s ease;
                }
                .teaser-links__link:hover,
                .teaser-links__link.active {
                    color: #213547;
                    border-bottom-color: #213547;
                }
                "#}
            </style>
        </header>
    }
}
