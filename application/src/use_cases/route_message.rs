//! Route Message use case.
//!
//! Runs one inbound message through the whole router:
//!
//! 1. Shortcut matcher (empty input, greeting, farewell, hot topic)
//! 2. Topic gate: off-topic text gets the redirect menu, never the generator
//! 3. [`ResolveBodyUseCase`] for on-topic text, with a warm fallback when
//!    the generator is unavailable
//! 4. Response composer renders the payload
//!
//! Always produces a payload; no error reaches the caller.

use crate::use_cases::resolve_body::ResolveBodyUseCase;
use drlegal_domain::{
    AreaClassifier, AreaLabel, CallToAction, ContactChannel, GenerationOutcome, Lexicon,
    ResponseComposer, ResponsePayload, ResponseTemplate, RouteKind, Shortcut, ShortcutMatcher,
    TopicDetector,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A composed payload plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedResponse {
    pub route: RouteKind,
    /// Area the message was classified into, when classification ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classified_area: Option<AreaLabel>,
    pub payload: ResponsePayload,
}

/// Use case for routing a single message.
#[derive(Clone)]
pub struct RouteMessageUseCase {
    lexicon: Arc<Lexicon>,
    shortcuts: ShortcutMatcher,
    channel: Arc<dyn ContactChannel>,
    resolve_body: ResolveBodyUseCase,
}

impl RouteMessageUseCase {
    pub fn new(
        lexicon: Arc<Lexicon>,
        channel: Arc<dyn ContactChannel>,
        resolve_body: ResolveBodyUseCase,
    ) -> Self {
        Self {
            lexicon,
            shortcuts: ShortcutMatcher::standard(),
            channel,
            resolve_body,
        }
    }

    pub fn with_shortcuts(mut self, shortcuts: ShortcutMatcher) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Route `text` and compose the reply.
    pub async fn execute(&self, text: &str) -> RoutedResponse {
        let text = text.trim();
        let classifier = AreaClassifier::new(&self.lexicon);
        let composer = ResponseComposer::new(self.channel.as_ref());

        if let Some(shortcut) = self.shortcuts.match_shortcut(text, &classifier) {
            let routed = Self::compose_shortcut(&composer, shortcut);
            info!("Routed via shortcut: {}", routed.route);
            return routed;
        }

        if !TopicDetector::new(&self.lexicon).is_in_domain(text) {
            info!("Message is off-topic; generator not consulted");
            return RoutedResponse {
                route: RouteKind::OffTopic,
                classified_area: None,
                payload: compose_cta(
                    &composer,
                    &ResponseTemplate::off_topic_body(),
                    None,
                    ResponseTemplate::off_topic_action(),
                ),
            };
        }

        debug!("Message is on-topic; resolving body via generator");
        match self.resolve_body.execute(text).await {
            GenerationOutcome::Success { body, area } => RoutedResponse {
                route: RouteKind::Generated,
                payload: compose_cta(
                    &composer,
                    &body,
                    Some(&area),
                    ResponseTemplate::generated_action(&area),
                ),
                classified_area: Some(area),
            },
            GenerationOutcome::Unavailable(reason) => {
                warn!("Generator unavailable ({}); using fallback", reason);
                let area = classifier.classify(text);
                RoutedResponse {
                    route: RouteKind::Fallback,
                    payload: compose_cta(
                        &composer,
                        &ResponseTemplate::fallback_body(&area),
                        None,
                        ResponseTemplate::fallback_action(text),
                    ),
                    classified_area: Some(area),
                }
            }
        }
    }

    fn compose_shortcut(composer: &ResponseComposer<'_>, shortcut: Shortcut) -> RoutedResponse {
        match shortcut {
            Shortcut::IntroMenu => RoutedResponse {
                route: RouteKind::IntroMenu,
                classified_area: None,
                payload: compose_cta(
                    composer,
                    &ResponseTemplate::intro_menu_body(),
                    None,
                    ResponseTemplate::intro_menu_action(),
                ),
            },
            Shortcut::Greeting => RoutedResponse {
                route: RouteKind::Greeting,
                classified_area: None,
                payload: compose_cta(
                    composer,
                    ResponseTemplate::greeting_body(),
                    None,
                    ResponseTemplate::greeting_action(),
                ),
            },
            Shortcut::Farewell => RoutedResponse {
                route: RouteKind::Farewell,
                classified_area: None,
                payload: composer.plain(ResponseTemplate::farewell_body()),
            },
            Shortcut::HotTopic {
                topic,
                description,
                area,
            } => RoutedResponse {
                route: RouteKind::HotTopic,
                payload: compose_cta(
                    composer,
                    &description,
                    Some(&area),
                    ResponseTemplate::hot_topic_action(&topic, &area),
                ),
                classified_area: Some(area),
            },
        }
    }
}

fn compose_cta(
    composer: &ResponseComposer<'_>,
    body: &str,
    area: Option<&AreaLabel>,
    action: CallToAction,
) -> ResponsePayload {
    composer.compose(body, area, &action.label, &action.message)
}
