//! Route taken for a message

use serde::Serialize;

/// Which branch of the router produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    IntroMenu,
    Greeting,
    Farewell,
    HotTopic,
    Generated,
    Fallback,
    OffTopic,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::IntroMenu => "intro_menu",
            RouteKind::Greeting => "greeting",
            RouteKind::Farewell => "farewell",
            RouteKind::HotTopic => "hot_topic",
            RouteKind::Generated => "generated",
            RouteKind::Fallback => "fallback",
            RouteKind::OffTopic => "off_topic",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
