//! Section identifiers and the navigation triggers that point at them.

use std::fmt;

/// One of the four landmark regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Work,
    PersonalWork,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Work,
        SectionId::PersonalWork,
        SectionId::Contact,
    ];

    /// DOM id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Work => "work",
            SectionId::PersonalWork => "personalWork",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The three triggers in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    About,
    Projects,
    Contact,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::About, NavTarget::Projects, NavTarget::Contact];

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::About => "About",
            NavTarget::Projects => "Projects",
            NavTarget::Contact => "Contact",
        }
    }

    /// Sections this trigger stands for. "Projects" covers both project lists.
    pub fn sections(self) -> &'static [SectionId] {
        match self {
            NavTarget::About => &[SectionId::About],
            NavTarget::Projects => &[SectionId::Work, SectionId::PersonalWork],
            NavTarget::Contact => &[SectionId::Contact],
        }
    }

    /// Section brought into view when the trigger is clicked.
    pub fn scroll_target(self) -> SectionId {
        self.sections()[0]
    }

    pub fn is_active(self, active: Option<SectionId>) -> bool {
        active.map_or(false, |section| self.sections().contains(&section))
    }
}
