//! Everything the page says: profile, projects and contact links.

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    /// Live site, empty when the project has none.
    pub link: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub code: Option<&'static str>,
    /// Whether the title links to `link`.
    pub has_link: bool,
}

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub employer: &'static str,
    pub employer_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    LinkedIn,
    GitHub,
    Email,
}

#[derive(Debug, PartialEq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub href: &'static str,
    pub label: &'static str,
}

impl ContactLink {
    /// Web profiles open in a new tab, mail links don't.
    pub fn opens_new_tab(&self) -> bool {
        self.kind != ContactKind::Email
    }
}

pub static PROFILE: Profile = Profile {
    name: "Juan Ferreyra",
    role: "Junior Frontend Developer",
    employer: "3pc",
    employer_url: "https://3pc.de/",
};

pub const CONTACT_BLURB: &str = "Reach out if you have a project in mind, want to collaborate, or are curious about the code behind my projects.";

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::LinkedIn,
        href: "https://www.linkedin.com/in/juan-ferreyra-24172b232/",
        label: "LinkedIn profile",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        href: "https://github.com/jnuaff",
        label: "GitHub profile",
    },
    ContactLink {
        kind: ContactKind::Email,
        href: "mailto:jmferreyrafernandez@gmail.com",
        label: "Send me an email",
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Teddy Awards Website Redesign",
        link: "https://www.teddyaward.tv/de/",
        description: "Developed the redesign of the new Teddy Awards Website, creating modular templates for integration into a CMS using HTML5/Nunjucks and JavaScript. I focused on semantic HTML, accessibility, CSS standards, modern communication design, and backend integration. I've worked alongside a Senior Developer who guided me through the project with mentoring and code reviews.",
        stack: &["HTML5 / Nunjucks", "CSS", "JavaScript", "Webpack"],
        code: None,
        has_link: true,
    },
    Project {
        title: "xCurator",
        link: "https://xcurator.landesmuseum.de/",
        description: "Integrated objects from two museum databases, enabling users to explore a diverse range of museum artefacts. I worked in a multidisciplinary team, collaborating with designers and backend developers. I was responsible for implementing some features, such as creating new stories in the user section. The main challenge of this was fetching data from the database, which required me to dive into GraphQL and Apollo Client to send requests through an API.",
        stack: &["Next.js", "Typescript", "GraphQL", "Apollo Client", "React Styled Components", "Stitches", "Radix UI"],
        code: None,
        has_link: true,
    },
];

pub static PERSONAL_PROJECTS: &[Project] = &[
    Project {
        title: "This Portfolio",
        link: "",
        description: "I've developed this portfolio to showcase my projects and skills. The main goal of this project was to create a clean and accessible design. I've used React and TypeScript to build this application. I've also used the Interesection Observer API for the navigation.",
        stack: &["React", "TypeScript"],
        code: Some("https://github.com/jnuaff/jnuaff-portfolio"),
        has_link: false,
    },
    Project {
        title: "Text Analyzer",
        link: "https://text-analyzer-netify.netlify.app/",
        description: "This application allows users to analyze a text by counting the number of characters and paragraphs, among other functions. The main goal of this project was to dive into regular expressions.",
        stack: &["React", "TypeScript"],
        code: Some("https://github.com/jnuaff/text-analyzer"),
        has_link: true,
    },
    Project {
        title: "The Mate Tee guide",
        link: "https://mate-tee-guide.netlify.app/",
        description: "Since I'm living in Berlin, there are not many people who are familiar with mate, so I've developed this application to explain curious people how important this kind of \"tea\" is to me. The challenge of this project was to play with animations and transitions, integrate some 3D objects and think out of the box in terms of design.",
        stack: &["React", "TypeScript"],
        code: Some("https://github.com/jnuaff/mate-tee-guide"),
        has_link: true,
    },
    Project {
        title: "Movies Search Engine",
        link: "https://movies-finder123.netlify.app/",
        description: "I've developed a movie search engine utilizing The Movie Database (TMDB) API. Users can seamlessly add movies to a watchlist and remove them at their convenience. This application was built with React and TypeScript, the data was fetched using the TanStack Query Library. A challenge in this project was enabling users to manage their watchlist within a Client-Side Application, allowing them to add and remove movies. I overcame it by using React Context alongside local storage.",
        stack: &["React", "TypeScript"],
        code: Some("https://github.com/jnuaff/movies-finder"),
        has_link: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn titles_are_unique_within_each_list() {
        for list in [PROJECTS, PERSONAL_PROJECTS] {
            let titles: HashSet<_> = list.iter().map(|p| p.title).collect();
            assert_eq!(titles.len(), list.len());
        }
    }

    #[test]
    fn linked_titles_have_a_link() {
        for project in PROJECTS.iter().chain(PERSONAL_PROJECTS) {
            if project.has_link {
                assert!(project.link.starts_with("https://"), "{} has no link", project.title);
            }
        }
    }

    #[test]
    fn work_projects_always_link_their_title() {
        assert!(PROJECTS.iter().all(|p| p.has_link));
    }

    #[test]
    fn every_project_lists_its_stack() {
        assert!(PROJECTS.iter().chain(PERSONAL_PROJECTS).all(|p| !p.stack.is_empty()));
    }

    #[test]
    fn portfolio_entry_keeps_its_stack() {
        let portfolio = PERSONAL_PROJECTS.iter().find(|p| p.title == "This Portfolio").expect("portfolio listed");
        assert_eq!(portfolio.stack, &["React", "TypeScript"]);
        assert!(!portfolio.has_link);
    }

    #[test]
    fn only_web_profiles_open_a_new_tab() {
        let new_tab: Vec<_> = CONTACT_LINKS.iter().filter(|c| c.opens_new_tab()).map(|c| c.kind).collect();
        assert_eq!(new_tab, vec![ContactKind::LinkedIn, ContactKind::GitHub]);
    }
}
