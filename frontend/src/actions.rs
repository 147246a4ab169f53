//! What the page's buttons and contact links do besides moving things around.

use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, Node, Window};

use crate::components::notification::{NotificationQueue, Severity};
use crate::config::SiteConfig;
use crate::engine::dom::set_style;
use crate::engine::listener::Listener;
use crate::engine::timers::TimerSet;

pub const WELCOME_MESSAGE: &str = "Welcome to Hangout! 🥤 Scroll to explore our delicious menu";

/// Where a delayed action takes the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    NewTab(&'static str),
    SameTab(&'static str),
}

/// Clicks on contact details anywhere on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Call,
    Social,
}

impl ContactAction {
    /// Every action whose contact detail appears in `text`; calls come first.
    pub fn detect(text: &str, site: &SiteConfig) -> Vec<Self> {
        let mut found = Vec::new();
        if text.contains(site.phone_display) {
            found.push(ContactAction::Call);
        }
        if text.contains(site.social_handle) {
            found.push(ContactAction::Social);
        }
        found
    }

    pub fn notice(self) -> (&'static str, Severity) {
        match self {
            ContactAction::Call => ("Calling Hangout... 📞", Severity::Success),
            ContactAction::Social => ("Opening Instagram... Follow us for updates! 📸", Severity::Info),
        }
    }

    pub fn delay_ms(self, site: &SiteConfig) -> u32 {
        match self {
            ContactAction::Call => site.call_delay_ms,
            ContactAction::Social => site.social_delay_ms,
        }
    }

    pub fn destination(self, site: &SiteConfig) -> Destination {
        match self {
            ContactAction::Call => Destination::SameTab(site.phone_uri),
            ContactAction::Social => Destination::NewTab(site.social_url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryProvider {
    Swiggy,
    Zomato,
}

impl DeliveryProvider {
    pub const ALL: [DeliveryProvider; 2] = [DeliveryProvider::Swiggy, DeliveryProvider::Zomato];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryProvider::Swiggy => "Swiggy",
            DeliveryProvider::Zomato => "Zomato",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            DeliveryProvider::Swiggy => "swiggy",
            DeliveryProvider::Zomato => "zomato",
        }
    }

    pub fn notice(self) -> &'static str {
        match self {
            DeliveryProvider::Swiggy => "Opening Swiggy... Order your favorites! 🛵",
            DeliveryProvider::Zomato => "Opening Zomato... Delicious treats await! 🍕",
        }
    }

    pub fn url(self, site: &SiteConfig) -> &'static str {
        match self {
            DeliveryProvider::Swiggy => site.swiggy_url,
            DeliveryProvider::Zomato => site.zomato_url,
        }
    }
}

pub fn order_message(name: Option<&str>, price: Option<&str>, site: &SiteConfig) -> String {
    format!(
        "{} {} - Call {} to order! 🎉",
        name.unwrap_or("Item"),
        price.unwrap_or(""),
        site.phone_display
    )
}

/// Runs page actions: a notification now, navigation a little later. Pending navigation
/// is cancelled when the last clone is dropped.
#[derive(Clone)]
pub struct ActionRunner {
    site: SiteConfig,
    queue: NotificationQueue,
    timers: TimerSet,
}

impl PartialEq for ActionRunner {
    fn eq(&self, other: &Self) -> bool {
        self.queue == other.queue && self.site == other.site
    }
}

fn go(destination: Destination, queue: &NotificationQueue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match destination {
        Destination::NewTab(url) => match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => {
                queue.enqueue("Your browser blocked the new tab, please allow pop-ups", Severity::Warning);
            }
            Err(err) => {
                warn!("failed to open {}: {:?}", url, err);
                queue.enqueue("Couldn't open the link, please try again", Severity::Error);
            }
        },
        Destination::SameTab(url) => {
            if let Err(err) = window.location().set_href(url) {
                warn!("failed to navigate to {}: {:?}", url, err);
            }
        }
    }
}

impl ActionRunner {
    pub fn new(site: SiteConfig, queue: NotificationQueue) -> Self {
        Self {
            site,
            queue,
            timers: TimerSet::new(),
        }
    }

    fn later(&self, delay_ms: u32, destination: Destination) {
        let queue = self.queue.clone();
        self.timers.schedule(delay_ms, move || go(destination, &queue));
    }

    pub fn contact(&self, action: ContactAction) {
        let (message, severity) = action.notice();
        self.queue.enqueue(message, severity);
        self.later(action.delay_ms(&self.site), action.destination(&self.site));
    }

    pub fn deliver(&self, provider: DeliveryProvider) {
        info!("delivery via {}", provider.label());
        self.queue.enqueue(provider.notice(), Severity::Info);
        self.later(
            self.site.delivery_delay_ms,
            Destination::NewTab(provider.url(&self.site)),
        );
    }

    pub fn order(&self, name: Option<&str>, price: Option<&str>) {
        let message = order_message(name, price, &self.site);
        debug!("order: {}", message);
        self.queue.enqueue(message, Severity::Success);
    }

    /// Fades the page in and greets the visitor.
    pub fn entrance(&self, document: &Document) {
        let Some(body) = document.body() else {
            return;
        };
        set_style(&body, "opacity", "0");
        set_style(&body, "filter", "blur(3px)");

        self.timers.schedule(self.site.reveal_delay_ms, move || {
            set_style(&body, "transition", "opacity 0.8s ease-in-out, filter 0.8s ease-in-out");
            set_style(&body, "opacity", "1");
            set_style(&body, "filter", "blur(0px)");
        });

        let queue = self.queue.clone();
        self.timers.schedule(
            self.site.reveal_delay_ms + self.site.welcome_delay_ms,
            move || {
                queue.enqueue(WELCOME_MESSAGE, Severity::Info);
            },
        );
    }

    /// Watches every click on the page for contact details.
    pub fn listen_for_contacts(&self, document: &Document) -> Result<Listener, JsValue> {
        let runner = self.clone();
        Listener::new(document, "click", move |event: Event| {
            let text = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .and_then(|node| node.text_content());
            let actions = text
                .map(|text| ContactAction::detect(&text, &runner.site))
                .unwrap_or_default();
            if actions.is_empty() {
                return;
            }
            event.prevent_default();
            for action in actions {
                runner.contact(action);
            }
        })
    }

    pub fn cancel_pending(&self) {
        self.timers.cancel_all();
    }
}

pub fn window_and_document() -> Option<(Window, Document)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;

    #[test]
    fn phone_text_triggers_a_call() {
        let text = "Call us: +91 86880 23266 (10am - 11pm)";
        let actions = ContactAction::detect(text, &SITE);
        assert_eq!(actions, vec![ContactAction::Call]);
        let action = actions[0];
        assert_eq!(action.delay_ms(&SITE), 1000);
        assert_eq!(action.destination(&SITE), Destination::SameTab("tel:+918688023266"));
        assert_eq!(action.notice().1, Severity::Success);
    }

    #[test]
    fn handle_opens_instagram() {
        let actions = ContactAction::detect("Follow @hangoutworld", &SITE);
        assert_eq!(actions, vec![ContactAction::Social]);
        let action = actions[0];
        assert_eq!(action.delay_ms(&SITE), 1200);
        assert_eq!(
            action.destination(&SITE),
            Destination::NewTab("https://instagram.com/hangoutworld")
        );
    }

    #[test]
    fn unrelated_text_does_nothing() {
        assert!(ContactAction::detect("Belgian waffles", &SITE).is_empty());
        assert!(ContactAction::detect("+91 86880", &SITE).is_empty());
    }

    #[test]
    fn phone_and_handle_together_fire_both() {
        let text = "Call +91 86880 23266 or follow @hangoutworld";
        assert_eq!(
            ContactAction::detect(text, &SITE),
            vec![ContactAction::Call, ContactAction::Social]
        );
    }

    #[test]
    fn delivery_providers_open_their_pages() {
        assert!(DeliveryProvider::Swiggy.url(&SITE).contains("swiggy.com"));
        assert!(DeliveryProvider::Zomato.url(&SITE).contains("zomato.com"));
        assert_eq!(SITE.delivery_delay_ms, 1500);
    }

    #[test]
    fn order_message_names_the_item() {
        assert_eq!(
            order_message(Some("Nutella Waffle"), Some("₹189"), &SITE),
            "Nutella Waffle ₹189 - Call +91 86880 23266 to order! 🎉"
        );
        assert_eq!(
            order_message(None, None, &SITE),
            "Item  - Call +91 86880 23266 to order! 🎉"
        );
    }
}
