//! Console output formatter for routed responses

use colored::Colorize;
use drlegal_application::RoutedResponse;
use drlegal_domain::ClassificationResult;

/// Formats routed responses for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Terminal text: body without markup, area tag, then the contact link.
    pub fn format_text(routed: &RoutedResponse) -> String {
        let payload = &routed.payload;
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n\n",
            "Dr. Legal".cyan().bold(),
            format!("[{}]", routed.route).dimmed()
        ));

        // The composed HTML already carries the tag and button; render the
        // body from the parts instead.
        let body = payload
            .body_html
            .split("<br><br>📌")
            .next()
            .unwrap_or(&payload.body_html);
        let body = match &payload.action {
            Some(action) => body
                .split(&format!("<a href=\"{}\"", action.url))
                .next()
                .unwrap_or(body),
            None => body,
        };
        output.push_str(html_to_text(body).trim_end());
        output.push('\n');

        if let Some(area) = &payload.area {
            output.push_str(&format!("\n{} {}\n", "📌".bold(), area.to_string().yellow().bold()));
        }

        if let Some(action) = &payload.action {
            output.push_str(&format!(
                "\n{}\n  {}\n",
                action.label.green().bold(),
                action.url.underline()
            ));
        }

        output
    }

    /// The HTML body exactly as the web endpoint serves it.
    pub fn format_html(routed: &RoutedResponse) -> String {
        routed.payload.body_html.clone()
    }

    /// Format as JSON
    pub fn format_json(routed: &RoutedResponse) -> String {
        serde_json::to_string_pretty(routed).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line classification summary.
    pub fn format_classification(result: &ClassificationResult) -> String {
        format!(
            "{} {} ({} keyword match{})",
            "Area:".cyan().bold(),
            result.area,
            result.match_count,
            if result.match_count == 1 { "" } else { "es" }
        )
    }
}

/// Turn the assistant's small HTML subset into plain text.
///
/// `<br>` becomes a newline and every other tag is dropped.
pub fn html_to_text(html: &str) -> String {
    let html = html.replace("<br>", "\n");
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use drlegal_domain::{ActionLink, AreaLabel, ResponsePayload, RouteKind};

    fn routed() -> RoutedResponse {
        let url = "https://wa.me/1?text=Quero%20falar%20sobre%20pix.".to_string();
        RoutedResponse {
            route: RouteKind::HotTopic,
            classified_area: Some(AreaLabel::from("Direito do Consumidor")),
            payload: ResponsePayload {
                body_html: format!(
                    "Errou no <b>PIX</b>?<br><br>📌 <b>Direito do Consumidor</b><br><a href=\"{}\" style=\"x\">📞 Falar</a>",
                    url
                ),
                area: Some(AreaLabel::from("Direito do Consumidor")),
                action: Some(ActionLink {
                    url,
                    label: "📞 Falar".to_string(),
                }),
            },
        }
    }

    #[test]
    fn test_html_to_text() {
        assert_eq!(html_to_text("Olá <b>mundo</b><br>linha"), "Olá mundo\nlinha");
    }

    #[test]
    fn test_format_text_shows_body_area_and_link() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_text(&routed());
        assert!(text.contains("[hot_topic]"));
        assert!(text.contains("Errou no PIX?"));
        assert!(text.contains("📌 Direito do Consumidor"));
        assert!(text.contains("https://wa.me/1?text=Quero%20falar%20sobre%20pix."));
        assert!(!text.contains("<a href"));
    }

    #[test]
    fn test_format_json() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&routed())).unwrap();
        assert_eq!(json["route"], "hot_topic");
        assert_eq!(json["payload"]["area"], "Direito do Consumidor");
    }

    #[test]
    fn test_format_html_is_payload_body() {
        let r = routed();
        assert_eq!(ConsoleFormatter::format_html(&r), r.payload.body_html);
    }
}
