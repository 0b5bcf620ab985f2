use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, MediaQueryList, ScrollBehavior,
    ScrollToOptions,
};

use folio_core::scroll::{axis_for_viewport, step_distance, ScrollAxis};

const WIDE_VIEWPORT_QUERY: &str = "(min-width: 1024px)";

pub(crate) struct NavScroller {
    list: Element,
    media: MediaQueryList,
    listeners: RefCell<Vec<EventListener>>,
}

thread_local! {
    static NAV_SCROLLER: RefCell<Option<Rc<NavScroller>>> = RefCell::new(None);
}

pub(crate) fn install_navigation(document: &Document, list: Element) {
    let Ok(Some(left_arrow)) = document.query_selector(".arrow-left") else {
        return;
    };
    let Ok(Some(right_arrow)) = document.query_selector(".arrow-right") else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(Some(media)) = window.match_media(WIDE_VIEWPORT_QUERY) else {
        return;
    };

    for arrow in [&left_arrow, &right_arrow] {
        let _ = arrow.set_attribute("role", "button");
        let _ = arrow.set_attribute("tabindex", "0");
    }

    let scroller = Rc::new(NavScroller {
        list,
        media,
        listeners: RefCell::new(Vec::new()),
    });
    scroller.install_arrow(&left_arrow, -1.0);
    scroller.install_arrow(&right_arrow, 1.0);
    scroller.install_orientation_reset();
    NAV_SCROLLER.with(|slot| {
        *slot.borrow_mut() = Some(scroller);
    });
}

impl NavScroller {
    fn install_arrow(self: &Rc<Self>, arrow: &Element, direction: f64) {
        let mut listeners = self.listeners.borrow_mut();

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new(arrow, "click", move |_event: &Event| {
            scroller.step(direction);
        }));

        let scroller = Rc::clone(self);
        listeners.push(EventListener::new(arrow, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Enter" || event.key() == " " {
                event.prevent_default();
                scroller.step(direction);
            }
        }));
    }

    fn install_orientation_reset(self: &Rc<Self>) {
        let scroller = Rc::clone(self);
        self.listeners.borrow_mut().push(EventListener::new(
            &self.media,
            "change",
            move |_event: &Event| {
                scroller.reset_scroll();
            },
        ));
    }

    fn step(&self, direction: f64) {
        let distance = self.step_distance() * direction;
        let options = ScrollToOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        match axis_for_viewport(self.media.matches()) {
            ScrollAxis::Vertical => {
                options.set_top(distance);
                options.set_left(0.0);
            }
            ScrollAxis::Horizontal => {
                options.set_left(distance);
                options.set_top(0.0);
            }
        }
        self.list.scroll_by_with_scroll_to_options(&options);
    }

    fn step_distance(&self) -> f64 {
        let first_card = self
            .list
            .query_selector(".projectCard")
            .ok()
            .flatten()
            .and_then(|card| card.dyn_into::<HtmlElement>().ok());
        let size = first_card.map(|card| match axis_for_viewport(self.media.matches()) {
            ScrollAxis::Vertical => f64::from(card.offset_height()),
            ScrollAxis::Horizontal => f64::from(card.offset_width()),
        });
        step_distance(size, self.layout_gap().as_deref())
    }

    fn layout_gap(&self) -> Option<String> {
        let window = web_sys::window()?;
        let styles = window.get_computed_style(&self.list).ok()??;
        for property in ["gap", "column-gap", "row-gap"] {
            if let Ok(value) = styles.get_property_value(property) {
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
        None
    }

    // Orientation changed; bring both axes back to the origin.
    fn reset_scroll(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.list.scroll_to_with_scroll_to_options(&options);
    }
}
