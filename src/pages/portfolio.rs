use log::info;
use yew::prelude::*;

use crate::components::contact::ContactLinks;
use crate::components::nav::Nav;
use crate::components::project_card::ProjectList;
use crate::content::{PERSONAL_PROJECTS, PROFILE, PROJECTS};
use crate::observer::{use_active_section, SectionRefs};
use crate::scroll::scroll_into_view;
use crate::section::{NavTarget, SectionId};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let sections = SectionRefs {
        about: use_node_ref(),
        work: use_node_ref(),
        personal_work: use_node_ref(),
        contact: use_node_ref(),
    };
    let active = use_active_section(sections.clone());

    let on_navigate = {
        let sections = sections.clone();
        Callback::from(move |target: NavTarget| {
            info!("Navigating to #{}", target.scroll_target());
            scroll_into_view(sections.get(target.scroll_target()));
        })
    };

    html! {
        <div class="app">
            <Nav {active} {on_navigate} />
            <main class="info-wrapper">
                <section class="info-wrapper__content" id={SectionId::About.id()} ref={sections.about.clone()}>
                    <h3>{"About me"}</h3>
                    <p>
                        {"I'm a self-taught frontend developer currently doing an apprenticeship at "}
                        <a href={PROFILE.employer_url} target="_blank" rel="noreferrer">{PROFILE.employer}</a>
                        {". I'm focused on creating clean and semantic web applications following accessibility standards. I care about writing reusable, maintainable, and high-quality code, learning from my teammates and keep up to date with the new technologies."}
                    </p>
                </section>
                <span class="divider" />
                <section class="info-wrapper__content" id={SectionId::Work.id()} ref={sections.work.clone()}>
                    <h3>{"Projects"}</h3>
                    <ProjectList projects={PROJECTS} />
                </section>
                <span class="divider" />
                <section class="info-wrapper__content" id={SectionId::PersonalWork.id()} ref={sections.personal_work.clone()}>
                    <h3>{"Personal Projects"}</h3>
                    <ProjectList projects={PERSONAL_PROJECTS} />
                </section>
                <span class="divider" />
                <section class="contact-wrapper" id={SectionId::Contact.id()} ref={sections.contact.clone()}>
                    <ContactLinks />
                </section>
            </main>
            <style>
                {r#"
                .app {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #213547;
                    line-height: 1.6;
                }
                .info-wrapper {
                    display: flex;
                    flex-direction: column;
                }
                .info-wrapper__content,
                .contact-wrapper {
                    padding: 2rem 0;
                    scroll-margin-top: 10rem;
                }
                .info-wrapper__content h3,
                .contact-wrapper h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }
                .divider {
                    display: block;
                    height: 1px;
                    background: #d5dde5;
                }
                .info-wrapper__items {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .info-wrapper__item h4 {
                    margin: 0;
                    font-size: 1.15rem;
                }
                .info-item__link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                }
                .info-item__link:hover h4 {
                    text-decoration: underline;
                }
                .info-item__wrapper {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    color: #213547;
                }
                .info-item__chips {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .info-item__chip {
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    background: #e8eef4;
                    font-size: 0.85rem;
                }
                .contact-wrapper__links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    padding: 0;
                }
                .contact-wrapper__link {
                    color: #213547;
                    transition: opacity 0.2s ease;
                }
                .contact-wrapper__link:hover {
                    opacity: 0.7;
                }
                @media (max-width: 600px) {
                    .page-header h1 {
                        font-size: 2rem;
                    }
                    .teaser-links {
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
