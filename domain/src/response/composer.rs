//! Response composer

use super::channel::ContactChannel;
use super::payload::{ActionLink, ResponsePayload};
use crate::lexicon::area::AreaLabel;

const BUTTON_STYLE: &str = "background:#1a3a6e; color:white; padding:12px 18px; border-radius:8px; text-decoration:none; font-weight:bold; display:inline-block; margin-top:10px;";

/// Assembles response payloads. Pure apart from the channel's link builder.
#[derive(Clone, Copy)]
pub struct ResponseComposer<'a> {
    channel: &'a dyn ContactChannel,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(channel: &'a dyn ContactChannel) -> Self {
        Self { channel }
    }

    /// Body, then `📌 <b>area</b>` when an area is given, then a button
    /// linking to the contact channel with `action_message` pre-filled.
    pub fn compose(
        &self,
        body_html: &str,
        area: Option<&AreaLabel>,
        action_label: &str,
        action_message: &str,
    ) -> ResponsePayload {
        let action = ActionLink {
            url: self.channel.build_link(action_message),
            label: action_label.to_string(),
        };

        let mut html = String::from(body_html);
        match area {
            Some(area) => html.push_str(&format!("<br><br>📌 <b>{}</b><br>", area)),
            None => html.push_str("<br><br>"),
        }
        html.push_str(&render_button(&action));

        ResponsePayload {
            body_html: html,
            area: area.cloned(),
            action: Some(action),
        }
    }

    /// Payload with no area tag and no call-to-action.
    pub fn plain(&self, body_html: &str) -> ResponsePayload {
        ResponsePayload {
            body_html: body_html.to_string(),
            area: None,
            action: None,
        }
    }
}

fn render_button(action: &ActionLink) -> String {
    format!(
        r#"<a href="{}" style="{}">{}</a>"#,
        action.url, BUTTON_STYLE, action.label
    )
}
