use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, KeyboardEvent};

use folio_core::catalog::{fallback_records, merge_project_lists, parse_project_payload};
use folio_core::gallery::Catalog;
use folio_core::project::{Project, RawProject};

use crate::net;

const LINK_READY_TEXT: &str = "Click here to see more...";
const LINK_PENDING_TEXT: &str = "Project link coming soon...";

pub(crate) struct GalleryView {
    list: Element,
    spotlight: Element,
    spotlight_title: Element,
    spotlight_description: Element,
    spotlight_link: HtmlAnchorElement,
    catalog: RefCell<Catalog>,
    active_card: RefCell<Option<Element>>,
    listeners: RefCell<Vec<EventListener>>,
}

thread_local! {
    static GALLERY_VIEW: RefCell<Option<Rc<GalleryView>>> = RefCell::new(None);
}

pub(crate) async fn build_gallery(document: &Document) -> Option<Rc<GalleryView>> {
    let list = document.get_element_by_id("projectList")?;
    let spotlight = document.get_element_by_id("projectSpotlight")?;
    let titles = document.get_element_by_id("spotlightTitles")?;
    let (title, description, link) = build_spotlight_structure(document, &titles)?;

    let records = merge_project_lists(fetch_project_records().await, &fallback_records());
    let catalog = Catalog::from_records(records);

    let view = Rc::new(GalleryView {
        list,
        spotlight,
        spotlight_title: title,
        spotlight_description: description,
        spotlight_link: link,
        catalog: RefCell::new(catalog),
        active_card: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });
    view.build_cards(document);
    GALLERY_VIEW.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&view));
    });
    Some(view)
}

async fn fetch_project_records() -> Vec<RawProject> {
    match net::fetch_text(&net::data_url("projectsData.json")).await {
        Ok(text) => parse_project_payload(&text),
        Err(error) => {
            console::warn!(
                "projects data unavailable, using fallback projects:",
                net::js_err(error)
            );
            Vec::new()
        }
    }
}

fn build_spotlight_structure(
    document: &Document,
    container: &Element,
) -> Option<(Element, Element, HtmlAnchorElement)> {
    container.set_text_content(None);
    let title = document.create_element("h3").ok()?;
    let description = document.create_element("p").ok()?;
    let link = document
        .create_element("a")
        .ok()?
        .dyn_into::<HtmlAnchorElement>()
        .ok()?;
    link.set_text_content(Some(LINK_READY_TEXT));
    let _ = container.append_child(&title);
    let _ = container.append_child(&description);
    let _ = container.append_child(&link);
    Some((title, description, link))
}

fn apply_background(element: &Element, image_path: &str) {
    let style = format!(
        "background-image: url('{image_path}'); background-size: cover; background-position: center; background-repeat: no-repeat;"
    );
    let _ = element.set_attribute("style", &style);
}

impl GalleryView {
    pub(crate) fn list_element(&self) -> &Element {
        &self.list
    }

    fn build_cards(self: &Rc<Self>, document: &Document) {
        let fragment = document.create_document_fragment();
        let entries = self.catalog.borrow().entries().to_vec();
        for (position, project) in entries.iter().enumerate() {
            let Ok(card) = document.create_element("div") else {
                continue;
            };
            card.set_class_name("projectCard");
            let _ = card.set_attribute("data-project-id", &project.project_id);
            card.set_id(&project.project_id);
            let _ = card.set_attribute("role", "button");
            let _ = card.set_attribute("tabindex", "0");
            let _ = card.set_attribute(
                "aria-label",
                &format!("{} project spotlight", project.project_name),
            );
            apply_background(&card, &project.card_image);

            let Ok(heading) = document.create_element("h4") else {
                continue;
            };
            heading.set_text_content(Some(&project.project_name));
            let Ok(teaser) = document.create_element("p") else {
                continue;
            };
            teaser.set_text_content(Some(&project.short_description));
            let _ = card.append_child(&heading);
            let _ = card.append_child(&teaser);

            if position == 0 {
                self.mark_active(&card);
                self.set_spotlight(project);
            } else {
                let _ = card.class_list().add_1("inactive");
            }

            self.install_card_listeners(&card, &project.project_id);
            let _ = fragment.append_child(&card);
        }
        let _ = self.list.append_child(&fragment);
    }

    fn install_card_listeners(self: &Rc<Self>, card: &Element, project_id: &str) {
        let mut listeners = self.listeners.borrow_mut();

        let view = Rc::clone(self);
        let card_for_click = card.clone();
        let id = project_id.to_string();
        listeners.push(EventListener::new(card, "click", move |_event: &Event| {
            view.select(&id, &card_for_click);
        }));

        let view = Rc::clone(self);
        let card_for_key = card.clone();
        let id = project_id.to_string();
        listeners.push(EventListener::new(card, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Enter" || event.key() == " " {
                event.prevent_default();
                view.select(&id, &card_for_key);
            }
        }));
    }

    // Unknown ids are ignored; re-selecting the active entry reapplies it.
    pub(crate) fn select(self: &Rc<Self>, id: &str, card: &Element) {
        let project = {
            let mut catalog = self.catalog.borrow_mut();
            if catalog.select(id).is_none() {
                return;
            }
            catalog.get(id).cloned()
        };
        let Some(project) = project else {
            return;
        };
        self.mark_active(card);
        self.set_spotlight(&project);
    }

    fn mark_active(&self, card: &Element) {
        let mut active = self.active_card.borrow_mut();
        if let Some(previous) = active.as_ref() {
            if previous != card {
                let _ = previous.class_list().remove_1("active");
                let _ = previous.class_list().add_1("inactive");
                let _ = previous.remove_attribute("aria-current");
            }
        }
        let _ = card.class_list().add_1("active");
        let _ = card.class_list().remove_1("inactive");
        let _ = card.set_attribute("aria-current", "true");
        *active = Some(card.clone());
    }

    fn set_spotlight(&self, project: &Project) {
        apply_background(&self.spotlight, &project.spotlight_image);
        self.spotlight_title
            .set_text_content(Some(&project.project_name));
        self.spotlight_description
            .set_text_content(Some(&project.long_description));

        let link = &self.spotlight_link;
        if project.has_url() {
            link.set_text_content(Some(LINK_READY_TEXT));
            link.set_href(&project.url);
            link.set_target("_blank");
            link.set_rel("noopener noreferrer");
            let _ = link.class_list().remove_1("inactive");
            let _ = link.remove_attribute("aria-disabled");
            let _ = link.set_attribute("tabindex", "0");
            let _ = link.set_attribute("style", "pointer-events: auto;");
        } else {
            link.set_text_content(Some(LINK_PENDING_TEXT));
            let _ = link.remove_attribute("href");
            let _ = link.set_attribute("aria-disabled", "true");
            let _ = link.class_list().add_1("inactive");
            let _ = link.set_attribute("tabindex", "-1");
            let _ = link.set_attribute("style", "pointer-events: none;");
        }
    }
}
