use std::cell::RefCell;
use std::rc::Rc;

use gloo::dialogs;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use folio_core::contact::{validate_contact, MAX_MESSAGE_LENGTH};

pub(crate) struct ContactForm {
    form: HtmlFormElement,
    email_input: HtmlInputElement,
    message_input: HtmlTextAreaElement,
    email_error: Element,
    message_error: Element,
    char_counter: Element,
    listeners: RefCell<Vec<EventListener>>,
}

thread_local! {
    static CONTACT_FORM: RefCell<Option<Rc<ContactForm>>> = RefCell::new(None);
}

pub(crate) fn install_contact_form(document: &Document) -> Option<Rc<ContactForm>> {
    let form = element_as::<HtmlFormElement>(document, "formSection")?;
    let email_input = element_as::<HtmlInputElement>(document, "contactEmail")?;
    let message_input = element_as::<HtmlTextAreaElement>(document, "contactMessage")?;
    let email_error = document.get_element_by_id("emailError")?;
    let message_error = document.get_element_by_id("messageError")?;
    let char_counter = document.get_element_by_id("charactersLeft")?;

    let view = Rc::new(ContactForm {
        form,
        email_input,
        message_input,
        email_error,
        message_error,
        char_counter,
        listeners: RefCell::new(Vec::new()),
    });
    view.update_char_counter();
    view.install_listeners();
    CONTACT_FORM.with(|slot| {
        *slot.borrow_mut() = Some(Rc::clone(&view));
    });
    Some(view)
}

fn element_as<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

impl ContactForm {
    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = self.listeners.borrow_mut();

        let view = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.message_input,
            "input",
            move |_event: &Event| {
                view.update_char_counter();
                view.message_error.set_text_content(Some(""));
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.email_input,
            "input",
            move |_event: &Event| {
                view.email_error.set_text_content(Some(""));
            },
        ));

        let view = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                view.handle_submit();
            },
        ));
    }

    fn handle_submit(&self) {
        let email = self.email_input.value();
        let validation = validate_contact(email.trim(), &self.message_input.value());
        self.email_error.set_text_content(Some(&validation.email));
        self.message_error
            .set_text_content(Some(&validation.message));
        if !validation.is_ok() {
            return;
        }
        dialogs::alert("Thanks for reaching out! Your message passed validation.");
        self.form.reset();
        self.email_error.set_text_content(Some(""));
        self.message_error.set_text_content(Some(""));
        self.update_char_counter();
    }

    fn update_char_counter(&self) {
        let used = self.message_input.value().chars().count();
        self.char_counter
            .set_text_content(Some(&format!("Characters: {used}/{MAX_MESSAGE_LENGTH}")));
        let over_limit = used > MAX_MESSAGE_LENGTH;
        let _ = self
            .char_counter
            .class_list()
            .toggle_with_force("error", over_limit);
        if over_limit {
            let _ = self.char_counter.set_attribute("style", "color: var(--error);");
        } else {
            let _ = self.char_counter.remove_attribute("style");
        }
    }
}
