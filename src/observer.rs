//! Browser side of section tracking: the `IntersectionObserver` binding and
//! the hook that ties it to a component's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::VISIBILITY_THRESHOLD;
use crate::section::SectionId;
use crate::tracker::{SectionTracker, Visibility};

/// Node references of the four section containers.
#[derive(Clone, Default, PartialEq)]
pub struct SectionRefs {
    pub about: NodeRef,
    pub work: NodeRef,
    pub personal_work: NodeRef,
    pub contact: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, section: SectionId) -> &NodeRef {
        match section {
            SectionId::About => &self.about,
            SectionId::Work => &self.work,
            SectionId::PersonalWork => &self.personal_work,
            SectionId::Contact => &self.contact,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &NodeRef)> {
        SectionId::ALL.into_iter().map(move |section| (section, self.get(section)))
    }
}

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` watching the section containers.
/// Dropping it disconnects the observer.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: BatchCallback,
}

impl VisibilityObserver {
    pub fn attach<F>(sections: &SectionRefs, threshold: f64, mut on_batch: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<Visibility>) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            on_batch(read_batch(&entries, threshold));
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for (section, node) in sections.iter() {
            match node.cast::<Element>() {
                Some(element) => observer.observe(&element),
                None => warn!("Section #{} is not mounted, not observing it", section),
            }
        }

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn read_batch(entries: &Array, threshold: f64) -> Vec<Visibility> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            Visibility::from_entry(
                &entry.target().id(),
                entry.intersection_ratio(),
                entry.is_intersecting(),
                threshold,
            )
        })
        .collect()
}

/// Tracks which section currently fills the viewport. `None` until the
/// first section crosses the threshold.
#[hook]
pub fn use_active_section(sections: SectionRefs) -> Option<SectionId> {
    let active = use_state(|| None::<SectionId>);

    {
        let active = active.clone();
        use_effect_once(move || {
            let tracker = Rc::new(RefCell::new(SectionTracker::new()));

            let observer = {
                let tracker = tracker.clone();
                VisibilityObserver::attach(&sections, VISIBILITY_THRESHOLD, move |batch| {
                    let changed = tracker.borrow_mut().apply(batch);
                    if let Some(section) = changed {
                        active.set(Some(section));
                    }
                })
            };
            let observer = match observer {
                Ok(observer) => Some(observer),
                Err(err) => {
                    warn!("Could not create section observer: {:?}", err);
                    None
                }
            };

            move || {
                debug!("Tearing down section observer");
                tracker.borrow_mut().detach();
                drop(observer);
            }
        });
    }

    *active
}
