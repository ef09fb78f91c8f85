use crate::constants::{CAPTION_HINT, CAPTION_ID, CAPTION_TITLE};
use web_sys as web;

const CAPTION_STYLE: &str = "position:absolute;left:0;right:0;bottom:2rem;text-align:center;pointer-events:none;font-family:system-ui,sans-serif;";
const TITLE_STYLE: &str =
    "color:rgba(255,255,255,0.8);font-size:1.5rem;font-weight:300;letter-spacing:0.3em;margin:0 0 0.5rem;";
const HINT_STYLE: &str =
    "color:rgba(255,255,255,0.3);font-size:0.875rem;letter-spacing:0.1em;margin:0;";

/// Add the title/hint caption after the canvas unless the page already has one.
///
/// Returns the element when it was created here so it can be removed on unmount.
pub fn install_caption(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) -> Option<web::Element> {
    if document.get_element_by_id(CAPTION_ID).is_some() {
        return None;
    }
    let parent = canvas.parent_element()?;
    let caption = document.create_element("div").ok()?;
    caption.set_id(CAPTION_ID);
    _ = caption.set_attribute("style", CAPTION_STYLE);

    for (tag, text, style) in [("h1", CAPTION_TITLE, TITLE_STYLE), ("p", CAPTION_HINT, HINT_STYLE)] {
        if let Ok(el) = document.create_element(tag) {
            el.set_text_content(Some(text));
            _ = el.set_attribute("style", style);
            _ = caption.append_child(&el);
        }
    }
    match parent.append_child(&caption) {
        Ok(_) => Some(caption),
        Err(e) => {
            log::warn!("caption not attached: {:?}", e);
            None
        }
    }
}

#[inline]
pub fn remove_caption(caption: &web::Element) {
    caption.remove();
}
