//! Engine - orchestration state shared by the TUI runner and tests
//!
//! The Engine owns the TEA state, the message channel, in-flight fetch tasks,
//! the shutdown signal and the event broadcaster.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

use skydeck_core::{AppPhase, Page, Phase, Theme, WidgetKind};

use crate::actions::FetchTaskMap;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::provider::{AnyProvider, DataProvider};
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    phase: AppPhase,
    theme: Theme,
    sidebar_expanded: bool,
    page: Page,
    widgets: [Phase; 4],
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            theme: state.theme(),
            sidebar_expanded: state.shell.sidebar_expanded,
            page: state.page,
            widgets: state.board.phases(),
        }
    }
}

/// Orchestration engine for Skydeck.
pub struct Engine<P = AnyProvider> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Data source for widget fetches
    provider: Arc<P>,

    /// In-flight fetches keyed by mount
    pub fetch_tasks: FetchTaskMap,

    /// Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<P> Engine<P>
where
    P: DataProvider + Sync + 'static,
{
    /// Create an Engine around an initial state.
    ///
    /// Must be called inside a tokio runtime: the signal handler is spawned here.
    pub fn new(state: AppState, provider: P) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let fetch_tasks: FetchTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            provider: Arc::new(provider),
            fetch_tasks,
            shutdown_tx,
            shutdown_rx,
            event_tx,
        }
    }

    /// Mount the initial page and start its fetches
    pub fn start(&mut self) {
        info!(
            "Engine starting on {:?} (theme: {}, sidebar: {})",
            self.state.page,
            self.state.theme(),
            if self.state.shell.sidebar_expanded {
                "expanded"
            } else {
                "collapsed"
            }
        );
        self.process_message(Message::MountPage);
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever it changed.
    ///
    /// State is compared after every step of the follow-up chain, so a
    /// remount publishes its `Idle` step before the new `Loading`.
    pub fn process_message(&mut self, msg: Message) {
        let event_tx = &self.event_tx;
        let mut last = StateSnapshot::capture(&self.state);

        process::process_message_observed(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.provider,
            &self.fetch_tasks,
            &self.shutdown_rx,
            |state| {
                let next = StateSnapshot::capture(state);
                if next != last {
                    emit_events(event_tx, &last, &next);
                    last = next;
                }
            },
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it. Returns false once every
    /// sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background tasks and wait for outstanding fetches.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        let _ = self.shutdown_tx.send(true);

        let tasks: Vec<_> = {
            let mut map = match self.fetch_tasks.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            map.drain().collect()
        };

        for (mount, handle) in tasks {
            match tokio::time::timeout(Duration::from_secs(2), handle).await {
                Ok(Ok(())) => debug!("Fetch {} finished", mount),
                Ok(Err(e)) if e.is_cancelled() => debug!("Fetch {} was cancelled", mount),
                Ok(Err(e)) => warn!("Fetch {} panicked: {}", mount, e),
                Err(_) => warn!("Fetch {} did not stop in time", mount),
            }
        }
    }

    fn emit(&self, event: EngineEvent) {
        emit(&self.event_tx, event);
    }
}

fn emit_events(tx: &broadcast::Sender<EngineEvent>, pre: &StateSnapshot, post: &StateSnapshot) {
    if pre.phase != post.phase {
        emit(tx, EngineEvent::PhaseChanged {
            old_phase: pre.phase,
            new_phase: post.phase,
        });
    }

    if pre.theme != post.theme {
        emit(tx, EngineEvent::ThemeChanged { theme: post.theme });
    }

    if pre.sidebar_expanded != post.sidebar_expanded {
        emit(tx, EngineEvent::SidebarToggled {
            expanded: post.sidebar_expanded,
        });
    }

    if pre.page != post.page {
        emit(tx, EngineEvent::PageChanged {
            from: pre.page,
            to: post.page,
        });
    }

    for (i, kind) in WidgetKind::ALL.iter().enumerate() {
        if pre.widgets[i] != post.widgets[i] {
            emit(tx, EngineEvent::WidgetPhaseChanged {
                kind: *kind,
                old_phase: pre.widgets[i],
                new_phase: post.widgets[i],
            });
        }
    }
}

/// send() only fails when nobody is subscribed.
fn emit(tx: &broadcast::Sender<EngineEvent>, event: EngineEvent) {
    let _ = tx.send(event);
}
