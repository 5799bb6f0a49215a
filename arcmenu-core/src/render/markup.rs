//! HTML fragments for hosts that mount descriptors as markup.

use super::{HeaderDescriptor, IconDescriptor, ItemDescriptor, RenderOutput};

pub fn header_html(header: &HeaderDescriptor) -> String {
    let mut html = String::from("<div id=\"menu-header\">");
    html.push_str(&format!("<div class=\"header\">{}</div>", header.header));
    if let Some(message) = header.message.as_ref().filter(|m| !m.is_empty()) {
        html.push_str(&format!("<div class=\"text\">{message}</div>"));
    }
    html.push_str("</div>");
    html
}

pub fn item_html(item: &ItemDescriptor) -> String {
    let class = if item.disabled {
        "button disabled"
    } else {
        "button"
    };
    let mut html = format!("<div class=\"{class}\" id=\"{}\">", item.dom_id());

    match &item.icon {
        IconDescriptor::Image { src } => html.push_str(&format!(
            "<div class=\"icon\"><img src=\"{src}\" alt=\"\"></div>"
        )),
        IconDescriptor::Glyph { class } => html.push_str(&format!(
            "<div class=\"icon\"><i class=\"{class}\"></i></div>"
        )),
        IconDescriptor::None => {}
    }

    html.push_str("<div class=\"column\">");
    html.push_str(&format!("<div class=\"header\">{}</div>", item.header));
    if let Some(message) = item.message.as_ref().filter(|m| !m.is_empty()) {
        html.push_str(&format!("<div class=\"text\">{message}</div>"));
    }
    html.push_str("</div></div>");
    html
}

impl RenderOutput {
    pub fn header_markup(&self) -> Option<String> {
        self.header.as_ref().map(header_html)
    }

    pub fn items_markup(&self) -> String {
        self.items.iter().map(item_html).collect()
    }
}
