//! DOM host: the browser side of [`Host`].
//!
//! Paints through [`board::render::draw`], announces winners with a blocking
//! `alert`, and owns two page elements it creates at mount time: the
//! "Restart Game" button (hidden until a game ends) and a notice line for
//! request failures.

use board::grid::Grid;
use board::input::{board_height, board_width};
use board::render;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::controller::Host;

const RESTART_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("top", "50%"),
    ("left", "50%"),
    ("transform", "translate(-50%, -50%)"),
    ("padding", "15px 30px"),
    ("font-size", "18px"),
    ("cursor", "pointer"),
    ("display", "none"),
];

const NOTICE_STYLE: &[(&str, &str)] = &[
    ("margin", "12px 0"),
    ("font-family", "sans-serif"),
    ("color", "#b00020"),
    ("display", "none"),
];

pub struct DomHost {
    window: Window,
    ctx: CanvasRenderingContext2d,
    restart: HtmlElement,
    notice: HtmlElement,
}

impl DomHost {
    /// Size the canvas, grab its 2D context and append the restart button and
    /// notice line to `<body>`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the page has no `<body>`, the canvas has no 2D
    /// context, or any DOM call fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn mount(window: Window, document: &Document, canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        canvas.set_width(board_width() as u32);
        canvas.set_height(board_height() as u32);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let body = document.body().ok_or_else(|| JsValue::from_str("page has no <body>"))?;
        let restart = create_element(document, "button", RESTART_STYLE)?;
        restart.set_inner_text("Restart Game");
        body.append_child(&restart)?;
        let notice = create_element(document, "p", NOTICE_STYLE)?;
        body.append_child(&notice)?;

        Ok(Self { window, ctx, restart, notice })
    }

    /// The restart button, for wiring its click listener.
    #[must_use]
    pub fn restart_button(&self) -> &HtmlElement {
        &self.restart
    }
}

fn create_element(document: &Document, tag: &str, style: &[(&str, &str)]) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    let css = element.style();
    for (name, value) in style {
        css.set_property(name, value)?;
    }
    Ok(element)
}

fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    if let Err(err) = element.style().set_property("display", value) {
        log::warn!("failed to set display={value}: {err:?}");
    }
}

impl Host for DomHost {
    fn render(&mut self, grid: &Grid) {
        if let Err(err) = render::draw(&self.ctx, grid) {
            log::warn!("board render failed: {err:?}");
        }
    }

    fn announce_winner(&mut self, winner: &str) {
        if let Err(err) = self.window.alert_with_message(&format!("{winner} wins!")) {
            log::warn!("winner alert failed: {err:?}");
        }
    }

    fn set_restart_visible(&mut self, visible: bool) {
        set_display(&self.restart, visible);
    }

    fn show_notice(&mut self, message: Option<&str>) {
        self.notice.set_inner_text(message.unwrap_or_default());
        set_display(&self.notice, message.is_some());
    }
}
