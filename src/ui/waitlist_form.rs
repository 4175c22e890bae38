//! Waitlist form handler
//!
//! Drives `FormMachine` from the form's submit event, simulates the network
//! round trip with a timer and stores the address in `localStorage`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{error, log, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement, Storage};

use crate::core::config::{BusyIndicator, FormConfig, InvalidFeedback, SuccessDisplay};
use crate::core::waitlist::{FormMachine, SubmitDecision, Waitlist, WaitlistError, WaitlistStore};
use crate::ui::dom::{BehaviorError, query, query_within};

/// `localStorage` slot under a fixed key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage(&self) -> Result<Storage, WaitlistError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(WaitlistError::Unavailable)
    }
}

impl WaitlistStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, WaitlistError> {
        self.storage()?
            .get_item(self.key)
            .map_err(|err| WaitlistError::Read(format!("{err:?}")))
    }

    fn write(&self, raw: &str) -> Result<(), WaitlistError> {
        self.storage()?
            .set_item(self.key, raw)
            .map_err(|err| WaitlistError::Write(format!("{err:?}")))
    }
}

/// Elements the handler writes to
#[derive(Clone)]
struct FormView {
    form: HtmlElement,
    input: HtmlInputElement,
    button: Option<HtmlButtonElement>,
    panel: Option<HtmlElement>,
    busy: BusyIndicator,
    success: SuccessDisplay,
}

impl FormView {
    fn set_busy(&self, busy: bool) {
        match self.busy {
            BusyIndicator::FormClass(class) => {
                let _ = self.form.class_list().toggle_with_force(class, busy);
            }
            BusyIndicator::Button { class, .. } => {
                if let Some(button) = &self.button {
                    let _ = button.class_list().toggle_with_force(class, busy);
                    button.set_disabled(busy);
                }
            }
        }
    }

    fn show_success(&self) -> Result<(), BehaviorError> {
        match self.success {
            SuccessDisplay::Classes {
                form_class,
                panel_class,
                ..
            } => {
                self.form.class_list().add_1(form_class)?;
                if let Some(panel) = &self.panel {
                    panel.class_list().add_1(panel_class)?;
                }
            }
            SuccessDisplay::Unhide { .. } => {
                self.form.set_hidden(true);
                if let Some(panel) = &self.panel {
                    panel.set_hidden(false);
                }
            }
        }
        Ok(())
    }
}

/// Restart the CSS shake animation on the input
fn shake(input: &HtmlInputElement, duration_ms: u32, pending: &RefCell<Option<Timeout>>) {
    let style = input.style();
    let _ = style.set_property("animation", "none");
    // Reading layout forces a reflow so the animation restarts
    let _ = input.offset_height();
    let _ = style.set_property(
        "animation",
        &format!("shake {}s ease", f64::from(duration_ms) / 1000.0),
    );

    let input = input.clone();
    // Replacing the previous timeout cancels it
    *pending.borrow_mut() = Some(Timeout::new(duration_ms, move || {
        let _ = input.style().set_property("animation", "");
    }));
}

pub struct WaitlistForm {
    _submit: EventListener,
}

impl WaitlistForm {
    pub fn install(document: &Document, config: &FormConfig) -> Result<Option<Self>, BehaviorError> {
        let Some(form) = query(document, config.form_selector) else {
            return Ok(None);
        };
        let input = query_within(&form, config.input_selector)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or(BehaviorError::MissingElement("waitlist email input"))?;
        let button = match config.busy {
            BusyIndicator::Button { selector, .. } => query_within(&form, selector)
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()),
            BusyIndicator::FormClass(_) => None,
        };
        let panel_selector = match config.success {
            SuccessDisplay::Classes { panel_selector, .. } => panel_selector,
            SuccessDisplay::Unhide { panel_selector } => panel_selector,
        };
        let panel = query(document, panel_selector).and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let form: HtmlElement = form
            .dyn_into()
            .map_err(|_| BehaviorError::MissingElement("waitlist form"))?;

        let view = FormView {
            form: form.clone(),
            input,
            button,
            panel,
            busy: config.busy,
            success: config.success,
        };
        let machine = Rc::new(RefCell::new(FormMachine::new()));
        let waitlist = Rc::new(Waitlist::new(LocalStorageStore::new(config.storage_key)));
        let invalid = config.invalid;
        let delay_ms = config.submit_delay_ms;
        let shake_timeout = RefCell::new(None);

        let listener = EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();

                let decision = machine.borrow_mut().submit(&view.input.value());
                match decision {
                    SubmitDecision::Ignored => {}
                    SubmitDecision::Rejected => match invalid {
                        InvalidFeedback::Shake { duration_ms } => {
                            shake(&view.input, duration_ms, &shake_timeout)
                        }
                        InvalidFeedback::Focus => {
                            let _ = view.input.focus();
                        }
                    },
                    SubmitDecision::Accepted(email) => {
                        view.set_busy(true);
                        let view = view.clone();
                        let machine = machine.clone();
                        let waitlist = waitlist.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(delay_ms).await;
                            finish_submission(&view, &machine, &waitlist, &email);
                        });
                    }
                }
            },
        );

        Ok(Some(Self { _submit: listener }))
    }
}

fn finish_submission(
    view: &FormView,
    machine: &RefCell<FormMachine>,
    waitlist: &Waitlist<LocalStorageStore>,
    email: &str,
) {
    if let Err(err) = view.show_success() {
        error!("Form submission error: {}", err);
        machine.borrow_mut().fail();
        view.set_busy(false);
        return;
    }

    log!("Waitlist signup: {}", email);
    if let Some(completion) = machine.borrow_mut().complete(waitlist, email) {
        match completion.persisted {
            Ok(true) => {}
            Ok(false) => log!("{} is already on the waitlist", email),
            Err(err) => warn!("Could not save to localStorage: {}", err),
        }
    }
    view.set_busy(false);
}
