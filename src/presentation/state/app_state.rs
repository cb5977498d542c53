use std::sync::Arc;

use crate::application::ports::{DocumentWriter, OutputStore, QuizSource};
use crate::application::services::ConversionService;
use crate::presentation::config::Settings;

pub struct AppState<Q, W, S>
where
    Q: QuizSource,
    W: DocumentWriter,
    S: OutputStore,
{
    pub conversion_service: Arc<ConversionService<Q, W, S>>,
    pub settings: Settings,
}

impl<Q, W, S> Clone for AppState<Q, W, S>
where
    Q: QuizSource,
    W: DocumentWriter,
    S: OutputStore,
{
    fn clone(&self) -> Self {
        Self {
            conversion_service: Arc::clone(&self.conversion_service),
            settings: self.settings.clone(),
        }
    }
}
