#![allow(dead_code)]

use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test, web, App, Error,
};
use async_trait::async_trait;
use brevity_model::{LengthBounds, ModelError, Summarizer};
use brevity_server::middleware::{security_headers, RequestId};
use brevity_server::{app_config, AppState};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum Behaviour {
    /// Return the input text unchanged
    Echo,
    /// Return this text for every request
    Fixed(String),
    /// Fail as if the model timed out
    Timeout,
}

/// Deterministic stand-in for a pretrained summarization model.
pub struct StubSummarizer {
    behaviour: Behaviour,
    calls: Mutex<Vec<(String, LengthBounds)>>,
}

impl StubSummarizer {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fixed(text: &str) -> Self {
        Self::new(Behaviour::Fixed(text.to_string()))
    }

    pub fn calls(&self) -> Vec<(String, LengthBounds)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> brevity_model::Result<String> {
        self.calls.lock().unwrap().push((text.to_string(), bounds));
        match &self.behaviour {
            Behaviour::Echo => Ok(text.to_string()),
            Behaviour::Fixed(output) => Ok(output.clone()),
            Behaviour::Timeout => Err(ModelError::Timeout(Duration::from_secs(30))),
        }
    }

    fn model_id(&self) -> &str {
        "stub/summarizer"
    }
}

pub async fn setup_test_app(
    summarizer: Arc<StubSummarizer>,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    let state = web::Data::new(AppState::new(summarizer));

    test::init_service(
        App::new()
            .app_data(state)
            .wrap(security_headers())
            .wrap(RequestId)
            .configure(app_config),
    )
    .await
}
