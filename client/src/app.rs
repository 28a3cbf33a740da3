//! WASM entry point: mounts the board on `<canvas id="connect4">`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::controller::BoardController;
use crate::dom::DomHost;
use crate::net::api::HttpApi;

/// Element id of the board canvas in `index.html`.
pub const CANVAS_ID: &str = "connect4";

type Controller = BoardController<HttpApi, DomHost>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("board canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let host = DomHost::mount(window, &document, &canvas)?;
    let restart = host.restart_button().clone();
    let controller = Rc::new(BoardController::new(HttpApi::default(), host));

    let on_board_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let controller: Rc<Controller> = Rc::clone(&controller);
            let offset_x = f64::from(event.offset_x());
            spawn_local(async move { controller.handle_board_click(offset_x).await });
        })
    };
    canvas.add_event_listener_with_callback("click", on_board_click.as_ref().unchecked_ref())?;
    on_board_click.forget();

    let on_restart_click = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut()>::new(move || {
            let controller: Rc<Controller> = Rc::clone(&controller);
            spawn_local(async move { controller.trigger_reset().await });
        })
    };
    restart.add_event_listener_with_callback("click", on_restart_click.as_ref().unchecked_ref())?;
    on_restart_click.forget();

    controller.render();
    log::info!("connect four board mounted");
    Ok(())
}
