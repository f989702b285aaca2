//! Helpers for driving handlers in unit tests without a Shell.

use crux_core::{Command, Request};
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};

use crate::commands::browser::BrowserOperation;
use crate::events::Event;
use crate::Effect;

/// Effects drained from a command, split by capability
#[derive(Default)]
pub struct Effects {
    pub http: Vec<Request<HttpRequest>>,
    pub browser: Vec<BrowserOperation>,
    pub renders: usize,
}

impl Effects {
    pub fn navigations(&self) -> Vec<&str> {
        self.browser
            .iter()
            .filter_map(|op| match op {
                BrowserOperation::Replace { location } => Some(location.as_str()),
                _ => None,
            })
            .collect()
    }
}

pub fn drain(command: &mut Command<Effect, Event>) -> Effects {
    let mut effects = Effects::default();
    for effect in command.effects() {
        match effect {
            Effect::Http(request) => effects.http.push(request),
            Effect::Browser(request) => effects.browser.push(request.operation.clone()),
            Effect::Render(_) => effects.renders += 1,
        }
    }
    effects
}

pub fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}

/// Resolve an HTTP effect and return the event the command sends back.
pub fn respond(
    command: &mut Command<Effect, Event>,
    request: &mut Request<HttpRequest>,
    response: HttpResponse,
) -> Event {
    request
        .resolve(HttpResult::Ok(response))
        .expect("failed to resolve HTTP request");
    command.events().next().expect("no event after response")
}

/// Resolve an HTTP effect with a client error instead of a response.
pub fn fail(
    command: &mut Command<Effect, Event>,
    request: &mut Request<HttpRequest>,
    error: crux_http::HttpError,
) -> Event {
    request
        .resolve(HttpResult::Err(error))
        .expect("failed to resolve HTTP request");
    command.events().next().expect("no event after failure")
}
