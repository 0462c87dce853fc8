use std::sync::Arc;

use crate::embedding::EmbeddingProvider;
use crate::engine::Engine;

pub struct AppState<E: EmbeddingProvider + 'static> {
    pub engine: Arc<Engine<E>>,
}

impl<E: EmbeddingProvider + 'static> Clone for AppState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E: EmbeddingProvider + 'static> AppState<E> {
    pub fn new(engine: Arc<Engine<E>>) -> Self {
        Self { engine }
    }
}
