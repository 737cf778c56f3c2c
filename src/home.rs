use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::EventsApi;
use crate::app::{Action, AppState, Outcome};
use crate::calendar::{sort_chronologically, CreateEventData};

/// Runs the network half of an action. Never touches UI state.
pub async fn perform<A: EventsApi + ?Sized>(api: &A, action: Action) -> Outcome {
    match action {
        Action::Reload => Outcome::Loaded(api.fetch_events().await),
        Action::Create(data) => {
            let result = match api.create_event(&data).await {
                Ok(created) => {
                    tracing::info!("Created event {}, refreshing list", created.id);
                    api.fetch_events().await.map(|mut events| {
                        sort_chronologically(&mut events);
                        events
                    })
                }
                Err(e) => Err(e),
            };
            Outcome::Created(result)
        }
        Action::Delete(id) => {
            let result = api.delete_event(&id).await;
            Outcome::Deleted { id, result }
        }
        Action::ToggleArchive(id) => {
            let result = api.archive_event(&id).await;
            Outcome::Archived { id, result }
        }
    }
}

/// Root orchestrator: owns the app state and the API client.
pub struct Home<A: EventsApi + ?Sized> {
    api: Arc<A>,
    pub state: AppState,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
    outcome_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl<A: EventsApi + ?Sized + 'static> Home<A> {
    pub fn new(api: Arc<A>, state: AppState) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state,
            outcome_tx,
            outcome_rx,
        }
    }

    async fn run(&mut self, action: Action) {
        self.state.begin(&action);
        let outcome = perform(self.api.as_ref(), action).await;
        self.state.apply(outcome);
    }

    pub async fn load_events(&mut self) {
        self.run(Action::Reload).await;
    }

    pub async fn handle_add_event(&mut self, data: CreateEventData) {
        self.run(Action::Create(data)).await;
    }

    pub async fn handle_delete(&mut self, id: &str) {
        self.run(Action::Delete(id.to_string())).await;
    }

    pub async fn handle_archive(&mut self, id: &str) {
        self.run(Action::ToggleArchive(id.to_string())).await;
    }

    /// Sends the request on a background task; the outcome is picked up by
    /// [`Home::drain_outcomes`] or [`Home::next_outcome`].
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching {:?}", action);
        self.state.begin(&action);

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = perform(api.as_ref(), action).await;
            if tx.send(outcome).is_err() {
                tracing::warn!("Outcome dropped, receiver closed");
            }
        });
    }

    /// Applies every outcome that has already arrived. Returns how many.
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Waits for the next outcome and applies it.
    pub async fn next_outcome(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => {
                self.state.apply(outcome);
                true
            }
            None => false,
        }
    }
}
