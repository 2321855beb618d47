// Generation runs: spawning the request and folding its events back into the app

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::BlogGenerator;
use crate::app::App;
use crate::events::AppEvent;
use crate::models::ProgressState;
use crate::progress::ProgressSink;

/// Forwards progress updates to the UI loop.
pub struct ChannelProgressSink {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ChannelProgressSink {
    pub const fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, state: ProgressState) {
        let _ = self.tx.send(AppEvent::Progress(state));
    }
}

/// Submit the form. Spawns a generation task unless validation fails.
pub fn spawn_generation(
    app: &mut App,
    generator: &Arc<dyn BlogGenerator>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Option<JoinHandle<()>> {
    let request = app.begin_generation()?;

    let generator = Arc::clone(generator);
    let tx = event_tx.clone();
    let sink: Arc<dyn ProgressSink> = Arc::new(ChannelProgressSink::new(tx.clone()));

    Some(tokio::spawn(async move {
        let event = match generator.generate(request, sink).await {
            Ok(blog) => AppEvent::BlogReady(blog),
            Err(e) => AppEvent::GenerationFailed(e.to_string()),
        };
        let _ = tx.send(event);
    }))
}

pub fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Progress(state) => app.apply_progress(state),
        AppEvent::BlogReady(blog) => app.finish_success(blog),
        AppEvent::GenerationFailed(error) => {
            log::warn!("Generation for {:?} failed: {error}", app.pending_topic);
            app.finish_failure();
        }
    }
}
