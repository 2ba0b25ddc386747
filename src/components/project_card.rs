use yew::prelude::*;

use crate::components::icons::{ExternalLinkIcon, GlyphSize};
use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    let title = if project.has_link {
        html! {
            <a class="info-item__link" href={project.link} target="_blank" rel="noreferrer">
                <h4>{project.title}</h4>
                <ExternalLinkIcon size={GlyphSize::Small} />
            </a>
        }
    } else {
        html! { <h4>{project.title}</h4> }
    };

    html! {
        <li class="info-wrapper__item">
            {title}
            <p>{project.description}</p>
            {
                if let Some(code) = project.code {
                    html! {
                        <p class="info-item__code">
                            {"You can see the code "}
                            <a href={code} class="info-item__wrapper" target="_blank" rel="noreferrer">
                                <span>{"here"}</span>
                                <ExternalLinkIcon size={GlyphSize::ExtraSmall} />
                            </a>
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <div class="info-item__chips">
                { for project.stack.iter().enumerate().map(|(index, tag)| html! {
                    <span key={index} class="info-item__chip">{*tag}</span>
                }) }
            </div>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: &'static [Project],
}

#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    html! {
        <ul class="info-wrapper__items">
            { for props.projects.iter().enumerate().map(|(index, project)| html! {
                <ProjectCard key={index} {project} />
            }) }
        </ul>
    }
}
