// ============================================================================
// NOTIFICATION VIEW - Notificación transitoria (esquina superior derecha)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::Notification;
use crate::views::AppActions;

pub fn render_notification(notification: &Notification, actions: &AppActions) -> Result<Element, JsValue> {
    let id = notification.id;
    let dismiss = actions.dismiss_notification.clone();

    let close = ElementBuilder::new("button")?
        .class("notificacao-close")
        .attr("type", "button")?
        .html("&times;")
        .on_click(move |_e| dismiss(id))?
        .build();

    Ok(ElementBuilder::new("div")?
        .class(&format!("notificacao notificacao-{}", notification.kind.css_suffix()))
        .attr("role", "status")?
        .attr("style", &format!("background: {};", notification.kind.background()))?
        .attr("data-id", &id.to_string())?
        .child(ElementBuilder::new("span")?.text(&notification.message).build())?
        .child(close)?
        .build())
}
