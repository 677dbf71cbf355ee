//! Scripted doubles for the driver and publisher seams.

use async_trait::async_trait;
use magpie_core::{
    ContentDriver, GenerateRequest, GenerateResponse, PostReceipt, SocialPublisher,
};
use magpie_error::{GeminiError, GeminiErrorKind, MagpieResult, XError, XErrorKind};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Driver that pops one canned reply per `generate` call and records the
/// prompts it saw.
#[derive(Clone, Default)]
pub struct ScriptedDriver {
    replies: Arc<Mutex<VecDeque<Result<String, ()>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, text: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
    }

    pub fn push_err(&self) {
        self.replies.lock().unwrap().push_back(Err(()));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> MagpieResult<GenerateResponse> {
        self.prompts.lock().unwrap().push(req.prompt.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(GenerateResponse { text }),
            Some(Err(())) => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "scripted failure".to_string(),
            ))
            .into()),
            None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                "script exhausted".to_string(),
            ))
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

/// Publisher that records every accepted post and can be toggled to fail.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    fail: Arc<AtomicBool>,
    calls: Arc<AtomicUsize>,
    posted: Arc<Mutex<Vec<String>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn posted(&self) -> Vec<String> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPublisher for RecordingPublisher {
    async fn publish(&self, text: &str) -> MagpieResult<PostReceipt> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail.load(Ordering::SeqCst) {
            return Err(XError::new(XErrorKind::HttpError {
                status_code: 503,
                message: "scripted outage".to_string(),
            })
            .into());
        }
        self.posted.lock().unwrap().push(text.to_string());
        Ok(PostReceipt {
            id: call.to_string(),
            text: text.to_string(),
        })
    }

    fn platform_name(&self) -> &'static str {
        "mock-x"
    }
}
