pub mod config;
pub mod content;
pub mod observer;
pub mod scroll;
pub mod section;
pub mod tracker;

pub mod components {
    pub mod contact;
    pub mod icons;
    pub mod nav;
    pub mod project_card;
}
pub mod pages {
    pub mod portfolio;
}

pub use pages::portfolio::Portfolio;
