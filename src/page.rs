//! Page mount: wires both behaviors to the live document.
//!
//! The returned [`PageContext`] owns every piece of page state. Event
//! listeners capture only reference-counted handles into it, so there is no
//! module-level mutable state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, Window};

use crate::config::PageConfig;
use crate::dom;
use crate::dom::scheduler::{BrowserHandle, BrowserScheduler, TaskSink};
use crate::dom::storage::LocalStore;
use crate::dom::surface::{DocumentTheme, NavElement};
use crate::error::PageError;
use crate::util::dark_mode::ThemeController;
use crate::util::schedule::{Capabilities, Task, ThrottleStrategy};
use crate::util::scroll_hide::ScrollHideNav;

const CONFIG_ATTRIBUTE: &str = "data-page-config";

pub type PageTheme = ThemeController<LocalStore, DocumentTheme>;

/// Scroll-hide component plus the scheduler that feeds tasks back into it.
#[derive(Debug)]
pub struct ScrollHideRuntime {
    nav: RefCell<ScrollHideNav<NavElement, BrowserHandle>>,
    scheduler: RefCell<BrowserScheduler>,
}

impl ScrollHideRuntime {
    fn new(window: Window, nav: ScrollHideNav<NavElement, BrowserHandle>) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Self>| {
            let sink: Weak<dyn TaskSink> = weak.clone();
            Self { nav: RefCell::new(nav), scheduler: RefCell::new(BrowserScheduler::new(window, sink)) }
        })
    }

    fn on_scroll(&self) {
        let (Ok(mut nav), Ok(mut sched)) = (self.nav.try_borrow_mut(), self.scheduler.try_borrow_mut()) else {
            log::warn!("scroll event dropped: nav busy");
            return;
        };
        nav.on_scroll(&mut *sched);
    }
}

impl TaskSink for ScrollHideRuntime {
    fn deliver(&self, task: Task) {
        let (Ok(mut nav), Ok(mut sched)) = (self.nav.try_borrow_mut(), self.scheduler.try_borrow_mut()) else {
            log::warn!("{task:?} dropped: nav busy");
            return;
        };
        nav.run(task, &mut *sched);
    }
}

#[derive(Debug)]
pub struct PageContext {
    pub theme: Rc<RefCell<PageTheme>>,
    /// `None` when the page has no navigation element.
    pub nav: Option<Rc<ScrollHideRuntime>>,
}

/// Read the optional JSON override from `<body data-page-config>`.
///
/// A page without the attribute gets the defaults.
pub fn read_config() -> Result<PageConfig, PageError> {
    let raw = dom::window()
        .ok()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match raw {
        Some(raw) => Ok(PageConfig::from_json(&raw)?),
        None => Ok(PageConfig::default()),
    }
}

/// Initialize the theme and attach the click and scroll listeners.
pub fn mount(config: &PageConfig) -> Result<PageContext, PageError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let caps = dom::probe_capabilities(&window);

    let theme = mount_theme(&window, &document, caps, config)?;
    let nav = match mount_nav(&window, &document, caps, config) {
        Ok(nav) => Some(nav),
        Err(e) => {
            log::warn!("scroll-hide navigation disabled: {e}");
            None
        }
    };

    Ok(PageContext { theme, nav })
}

fn mount_theme(
    window: &Window,
    document: &Document,
    caps: Capabilities,
    config: &PageConfig,
) -> Result<Rc<RefCell<PageTheme>>, PageError> {
    let body = document
        .body()
        .ok_or_else(|| PageError::MissingElement { selector: "body".to_owned() })?;
    let toggle = document.get_element_by_id(&config.toggle_id);
    if toggle.is_none() {
        log::warn!("no #{} control; theme applied without a toggle", config.toggle_id);
    }

    let surface = DocumentTheme::new(body.into(), toggle.clone(), config);
    let mut controller = ThemeController::new(LocalStore::open(window), surface, config.storage_key.clone());
    controller.initialize(dom::system_prefers_dark(window));
    let theme = Rc::new(RefCell::new(controller));

    if let Some(toggle) = toggle {
        let theme_for_click = Rc::clone(&theme);
        let on_click = Closure::wrap(Box::new(move || {
            if let Ok(mut ctl) = theme_for_click.try_borrow_mut() {
                ctl.toggle();
            }
        }) as Box<dyn FnMut()>);
        listen(&toggle, "click", caps, on_click)?;
    }

    Ok(theme)
}

fn mount_nav(
    window: &Window,
    document: &Document,
    caps: Capabilities,
    config: &PageConfig,
) -> Result<Rc<ScrollHideRuntime>, PageError> {
    let nav_el = document
        .query_selector(&config.nav_selector)?
        .ok_or_else(|| PageError::MissingElement { selector: config.nav_selector.clone() })?;
    let strategy = ThrottleStrategy::select(caps, config);
    let host = NavElement::new(nav_el, document.clone(), config);
    let runtime = ScrollHideRuntime::new(window.clone(), ScrollHideNav::new(host, strategy, config.idle()));

    let runtime_for_scroll = Rc::clone(&runtime);
    let on_scroll = Closure::wrap(Box::new(move || runtime_for_scroll.on_scroll()) as Box<dyn FnMut()>);
    listen(window, "scroll", caps, on_scroll)?;

    Ok(runtime)
}

/// Register a page-lifetime listener, through `attachEvent` on legacy hosts.
fn listen(target: &EventTarget, event: &str, caps: Capabilities, callback: Closure<dyn FnMut()>) -> Result<(), PageError> {
    if caps.event_listener {
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    } else {
        let attach = Reflect::get(target.as_ref(), &JsValue::from_str("attachEvent"))?.dyn_into::<Function>()?;
        attach.call2(target.as_ref(), &JsValue::from_str(&format!("on{event}")), callback.as_ref())?;
    }
    callback.forget();
    Ok(())
}
