use portfolio::components::nav::{Nav, NavProps};
use portfolio::content::{PERSONAL_PROJECTS, PROJECTS};
use portfolio::section::SectionId;
use portfolio::Portfolio;
use yew::{Callback, ServerRenderer};

async fn render_page() -> String {
    ServerRenderer::<Portfolio>::new().hydratable(false).render().await
}

/// Markup between the opening tag of `#start` and the opening tag of `#end`.
fn section<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(&format!("id=\"{start}\"")).expect("start section rendered");
    let to = html.find(&format!("id=\"{end}\"")).expect("end section rendered");
    assert!(from < to, "#{start} should come before #{end}");
    &html[from..to]
}

fn assert_in_order(html: &str, titles: &[&str]) {
    let mut last = 0;
    for title in titles {
        let at = html[last..]
            .find(&format!("<h4>{title}</h4>"))
            .unwrap_or_else(|| panic!("{title} missing or out of order"));
        last += at + 1;
    }
}

#[tokio::test]
async fn renders_all_four_landmarks_in_order() {
    let html = render_page().await;

    let positions: Vec<_> = ["about", "work", "personalWork", "contact"]
        .iter()
        .map(|id| html.find(&format!("id=\"{id}\"")).unwrap_or_else(|| panic!("#{id} missing")))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn renders_one_card_per_project_in_order() {
    let html = render_page().await;
    let work = section(&html, "work", "personalWork");
    let personal = section(&html, "personalWork", "contact");

    assert_eq!(work.matches("class=\"info-wrapper__item\"").count(), PROJECTS.len());
    assert_eq!(personal.matches("class=\"info-wrapper__item\"").count(), PERSONAL_PROJECTS.len());

    let work_titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
    let personal_titles: Vec<_> = PERSONAL_PROJECTS.iter().map(|p| p.title).collect();
    assert_in_order(work, &work_titles);
    assert_in_order(personal, &personal_titles);

    for title in work_titles.iter().chain(&personal_titles) {
        assert_eq!(html.matches(&format!("<h4>{title}</h4>")).count(), 1, "{title} rendered once");
    }
}

#[tokio::test]
async fn code_link_only_for_projects_with_code() {
    let html = render_page().await;
    let work = section(&html, "work", "personalWork");
    let personal = section(&html, "personalWork", "contact");

    let expected = |projects: &[portfolio::content::Project]| projects.iter().filter(|p| p.code.is_some()).count();
    assert_eq!(work.matches("class=\"info-item__code\"").count(), expected(PROJECTS));
    assert_eq!(personal.matches("class=\"info-item__code\"").count(), expected(PERSONAL_PROJECTS));

    for project in PERSONAL_PROJECTS.iter().filter_map(|p| p.code) {
        assert!(personal.contains(&format!("href=\"{project}\"")), "missing code link {project}");
    }
}

#[tokio::test]
async fn titles_link_out_only_when_flagged() {
    let html = render_page().await;
    let linked = PROJECTS.iter().chain(PERSONAL_PROJECTS).filter(|p| p.has_link).count();

    assert_eq!(html.matches("class=\"info-item__link\"").count(), linked);
    assert!(html.contains("<h4>This Portfolio</h4>"));
}

#[tokio::test]
async fn no_navigation_trigger_is_active_before_scrolling() {
    let html = render_page().await;

    assert_eq!(html.matches("class=\"teaser-links__link\"").count(), 3);
    assert!(!html.contains("teaser-links__link active"));
}

async fn render_nav(active: Option<SectionId>) -> String {
    ServerRenderer::<Nav>::with_props(move || NavProps { active, on_navigate: Callback::noop() })
        .hydratable(false)
        .render()
        .await
}

/// Labels of the triggers rendered with the `active` class.
fn active_triggers(html: &str) -> Vec<&str> {
    html.match_indices("class=\"teaser-links__link active\"")
        .map(|(at, _)| {
            let label = &html[at..];
            let start = label.find('>').expect("button tag closed") + 1;
            let end = label.find("</button>").expect("button closed");
            label[start..end].trim()
        })
        .collect()
}

#[tokio::test]
async fn highlights_the_trigger_of_the_active_section() {
    let cases = [
        (SectionId::About, "About"),
        (SectionId::Work, "Projects"),
        (SectionId::PersonalWork, "Projects"),
        (SectionId::Contact, "Contact"),
    ];

    for (section, label) in cases {
        let html = render_nav(Some(section)).await;
        assert_eq!(active_triggers(&html), vec![label], "active section {section}");
        assert_eq!(html.matches("class=\"teaser-links__link\"").count(), 2);
    }
}

#[tokio::test]
async fn no_trigger_highlighted_without_an_active_section() {
    let html = render_nav(None).await;
    assert!(active_triggers(&html).is_empty());
}

#[tokio::test]
async fn contact_section_links_out() {
    let html = render_page().await;
    let contact = &html[html.find("id=\"contact\"").expect("contact rendered")..];

    assert_eq!(contact.matches("class=\"contact-wrapper__link\"").count(), 3);
    assert!(contact.contains("href=\"mailto:jmferreyrafernandez@gmail.com\""));
    assert!(contact.contains("href=\"https://github.com/jnuaff\""));
}
