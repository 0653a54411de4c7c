//! Scripted in-memory backends for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::backend::{
    BackendConnector, ChatBackend, ChunkStream, GenerateChunk, GenerateRequest,
};
use crate::AiError;

/// What the fake service does for one turn.
pub(crate) enum Script {
    /// Stream these items, then end.
    Chunks(Vec<Result<GenerateChunk, AiError>>),
    /// Fail before any reply bytes arrive.
    Fail(AiError),
}

impl Script {
    pub(crate) fn reply(parts: &[&str]) -> Self {
        Self::Chunks(parts.iter().map(|p| Ok(GenerateChunk::text(*p))).collect())
    }

    pub(crate) fn fail_after(parts: &[&str], err: AiError) -> Self {
        let mut items: Vec<_> = parts.iter().map(|p| Ok(GenerateChunk::text(*p))).collect();
        items.push(Err(err));
        Self::Chunks(items)
    }
}

type Shared<T> = Arc<Mutex<T>>;

pub(crate) struct FakeBackend {
    scripts: Shared<VecDeque<Script>>,
    requests: Shared<Vec<GenerateRequest>>,
}

impl FakeBackend {
    pub(crate) fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Arc::new(Mutex::new(scripts.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn requests(&self) -> Shared<Vec<GenerateRequest>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn stream_generate(&self, request: &GenerateRequest) -> Result<ChunkStream, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.scripts.lock().unwrap().pop_front() {
            Some(Script::Chunks(items)) => Ok(Box::pin(futures_util::stream::iter(items))),
            Some(Script::Fail(err)) => Err(err),
            None => Err(AiError::ApiError("no scripted reply".into())),
        }
    }
}

/// Hands out [`FakeBackend`]s that share one script queue and request log.
pub(crate) struct FakeConnector {
    scripts: Shared<VecDeque<Script>>,
    requests: Shared<Vec<GenerateRequest>>,
    keys: Shared<Vec<String>>,
    connects: AtomicUsize,
    refuse_first: AtomicUsize,
}

impl FakeConnector {
    pub(crate) fn new(scripts: Vec<Script>) -> Arc<Self> {
        Arc::new(Self {
            scripts: Arc::new(Mutex::new(scripts.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
            keys: Arc::new(Mutex::new(Vec::new())),
            connects: AtomicUsize::new(0),
            refuse_first: AtomicUsize::new(0),
        })
    }

    /// Make the next `n` connect attempts fail.
    pub(crate) fn refuse_next(&self, n: usize) {
        self.refuse_first.store(n, Ordering::SeqCst);
    }

    pub(crate) fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }

    pub(crate) fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl BackendConnector for FakeConnector {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn ChatBackend>, AiError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.keys.lock().unwrap().push(api_key.to_string());

        let refused = self
            .refuse_first
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refused {
            return Err(AiError::NetworkError("connect refused".into()));
        }

        Ok(Arc::new(FakeBackend {
            scripts: Arc::clone(&self.scripts),
            requests: Arc::clone(&self.requests),
        }))
    }
}
