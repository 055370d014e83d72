//! WASM entry point for the Cosmic Curiosity page.
//!
//! One [`Page`] lives in a `thread_local!` cell (wasm-bindgen exports free
//! functions, not stateful structs); the page's JS calls the exports below
//! from its event handlers.

pub mod a11y;
pub mod canvas;
pub mod page;
pub mod schedule;
pub mod storage;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use cosmic_engine::page::{ambience, content};
use cosmic_engine::{PollOption, SurfaceProvider};

use crate::canvas::DocumentSurfaces;
use crate::page::Page;

thread_local! {
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn with_page<R>(f: impl FnOnce(&mut Page) -> R) -> R {
    PAGE.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let page = borrow
            .as_mut()
            .expect("Page not initialized. Call page_init() first.");
        f(page)
    })
}

/// 0-based weekday (Sunday = 0), the key for the daily rotation.
fn weekday() -> usize {
    js_sys::Date::new_0().get_day() as usize
}

#[wasm_bindgen]
pub fn page_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    PAGE.with(|cell| {
        *cell.borrow_mut() = Some(Page::new());
    });
    log::info!("cosmic-curiosity: initialized");
}

// ---- Simulation controls ----

#[wasm_bindgen]
pub fn orbit_start() {
    with_page(|page| page.orbit().start());
}

#[wasm_bindgen]
pub fn orbit_pause() {
    with_page(|page| page.orbit().pause());
}

#[wasm_bindgen]
pub fn orbit_reset() {
    with_page(|page| page.orbit().reset());
}

#[wasm_bindgen]
pub fn orbit_set_speed(value: f64) {
    with_page(|page| page.orbit().set_param(value));
}

#[wasm_bindgen]
pub fn gravity_start() {
    with_page(|page| page.gravity().start());
}

#[wasm_bindgen]
pub fn gravity_pause() {
    with_page(|page| page.gravity().pause());
}

#[wasm_bindgen]
pub fn gravity_reset() {
    with_page(|page| page.gravity().reset());
}

#[wasm_bindgen]
pub fn gravity_set_strength(value: f64) {
    with_page(|page| page.gravity().set_param(value));
}

#[wasm_bindgen]
pub fn solar_start() {
    with_page(|page| page.solar().start());
}

#[wasm_bindgen]
pub fn solar_pause() {
    with_page(|page| page.solar().pause());
}

#[wasm_bindgen]
pub fn solar_reset() {
    with_page(|page| page.solar().reset());
}

#[wasm_bindgen]
pub fn solar_set_zoom(value: f64) {
    with_page(|page| page.solar().set_param(value));
}

#[wasm_bindgen]
pub fn notify_resize() {
    with_page(|page| page.notify_resize());
}

// ---- Poll ----

#[wasm_bindgen]
pub fn poll_submit(option: &str) -> Result<String, JsValue> {
    let option = PollOption::from_key(option)
        .ok_or_else(|| JsValue::from_str(&format!("unknown poll option: {option}")))?;
    let results = with_page(|page| page.poll_mut().submit(option))
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    a11y::announce(&format!("Vote recorded for {}.", option.label()));
    Ok(results.to_json())
}

#[wasm_bindgen]
pub fn poll_results_json() -> String {
    with_page(|page| page.poll().results().to_json())
}

#[wasm_bindgen]
pub fn poll_has_voted() -> bool {
    with_page(|page| page.poll().has_voted())
}

// ---- Daily content ----

#[wasm_bindgen]
pub fn fact_of_today() -> String {
    content::fact_for_day(weekday()).to_string()
}

#[wasm_bindgen]
pub fn random_fact() -> String {
    with_page(|page| page.random_fact().to_string())
}

#[wasm_bindgen]
pub fn what_if_today_json() -> String {
    content::what_if_for_day(weekday()).to_json()
}

#[wasm_bindgen]
pub fn news_json() -> String {
    content::news_json()
}

#[wasm_bindgen]
pub fn more_news_json() -> String {
    content::more_news_json()
}

// ---- Decorative layers ----

#[wasm_bindgen]
pub fn draw_card_art(canvas_id: &str, index: u32) {
    if let Some(mut surface) = DocumentSurfaces.acquire(canvas_id) {
        cosmic_engine::draw_card_art(surface.as_mut(), index as usize);
    }
}

#[wasm_bindgen]
pub fn particle_field_json(mobile: bool) -> String {
    with_page(|page| ambience::particle_field_json(page.seed(), mobile))
}

#[wasm_bindgen]
pub fn shooting_star_json() -> String {
    with_page(|page| ambience::shooting_star_json(page.seed()))
}

#[wasm_bindgen]
pub fn announce(message: &str) {
    a11y::announce(message);
}
