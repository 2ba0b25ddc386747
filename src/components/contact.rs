use yew::prelude::*;

use crate::components::icons::{EnvelopeIcon, GithubIcon, GlyphSize, LinkedinIcon};
use crate::content::{ContactKind, ContactLink, CONTACT_BLURB, CONTACT_LINKS};

fn contact_icon(kind: ContactKind) -> Html {
    match kind {
        ContactKind::LinkedIn => html! { <LinkedinIcon /> },
        ContactKind::GitHub => html! { <GithubIcon /> },
        ContactKind::Email => html! { <EnvelopeIcon size={GlyphSize::ExtraLarge} /> },
    }
}

fn contact_link(link: &ContactLink) -> Html {
    let (target, rel) = if link.opens_new_tab() {
        (Some("_blank"), Some("noreferrer"))
    } else {
        (None, None)
    };

    html! {
        <li key={link.href}>
            <a class="contact-wrapper__link" href={link.href} {target} {rel} aria-label={link.label}>
                {contact_icon(link.kind)}
            </a>
        </li>
    }
}

#[function_component(ContactLinks)]
pub fn contact_links() -> Html {
    html! {
        <>
            <h3>{"Let's connect!"}</h3>
            <p>{CONTACT_BLURB}</p>
            <ul class="contact-wrapper__links">
                { for CONTACT_LINKS.iter().map(contact_link) }
            </ul>
        </>
    }
}
