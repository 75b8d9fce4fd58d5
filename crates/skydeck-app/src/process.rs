//! Message processing
//!
//! Runs the TEA update loop and hands any resulting actions to the
//! background task layer.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, FetchTaskMap};
use crate::handler;
use crate::message::Message;
use crate::provider::DataProvider;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<P>,
    fetch_tasks: &FetchTaskMap,
    shutdown_rx: &watch::Receiver<bool>,
) where
    P: DataProvider + Sync + 'static,
{
    process_message_observed(
        state,
        message,
        msg_tx,
        provider,
        fetch_tasks,
        shutdown_rx,
        |_| {},
    );
}

/// Like [`process_message`], calling `on_step` after every `update` in the
/// follow-up chain so intermediate states can be observed.
pub fn process_message_observed<P, F>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    provider: &Arc<P>,
    fetch_tasks: &FetchTaskMap,
    shutdown_rx: &watch::Receiver<bool>,
    mut on_step: F,
) where
    P: DataProvider + Sync + 'static,
    F: FnMut(&AppState),
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        on_step(state);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                provider.clone(),
                fetch_tasks.clone(),
                shutdown_rx.clone(),
            );
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;
    use skydeck_core::{Page, Phase, WidgetKind};
    use std::collections::HashMap;

    fn harness() -> (
        mpsc::Sender<Message>,
        mpsc::Receiver<Message>,
        FetchTaskMap,
        watch::Sender<bool>,
        watch::Receiver<bool>,
    ) {
        let (tx, rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let tasks: FetchTaskMap = Arc::new(std::sync::Mutex::new(HashMap::new()));
        (tx, rx, tasks, shutdown_tx, shutdown_rx)
    }

    #[tokio::test]
    async fn test_mount_page_spawns_one_fetch_per_widget() {
        let (tx, mut rx, tasks, _shutdown_tx, shutdown_rx) = harness();
        let provider = Arc::new(MockProvider::instant());
        let mut state = AppState::in_memory(None);

        process_message(&mut state, Message::MountPage, &tx, &provider, &tasks, &shutdown_rx);
        assert_eq!(state.board.phases(), [Phase::Loading; 4]);

        for _ in 0..4 {
            let msg = rx.recv().await.unwrap();
            process_message(&mut state, msg, &tx, &provider, &tasks, &shutdown_rx);
        }
        assert_eq!(state.board.phases(), [Phase::Ready; 4]);
    }

    #[tokio::test]
    async fn test_navigate_follows_up_with_mount() {
        let (tx, mut rx, tasks, _shutdown_tx, shutdown_rx) = harness();
        let provider = Arc::new(MockProvider::instant());
        let mut state = AppState::in_memory(None);

        process_message(&mut state, Message::MountPage, &tx, &provider, &tasks, &shutdown_rx);
        process_message(
            &mut state,
            Message::Navigate(Page::News),
            &tx,
            &provider,
            &tasks,
            &shutdown_rx,
        );

        assert_eq!(state.page, Page::News);
        assert_eq!(state.board.phase(WidgetKind::News), Phase::Loading);
        assert_eq!(state.board.phase(WidgetKind::Weather), Phase::Idle);

        // Completions from the dashboard mount are stale and dropped
        while state.board.phase(WidgetKind::News) == Phase::Loading {
            let msg = rx.recv().await.unwrap();
            process_message(&mut state, msg, &tx, &provider, &tasks, &shutdown_rx);
        }
        assert_eq!(state.board.phase(WidgetKind::News), Phase::Ready);
        assert_eq!(state.board.phase(WidgetKind::Weather), Phase::Idle);
    }

    #[tokio::test]
    async fn test_observer_sees_each_step_of_a_remount() {
        let (tx, _rx, tasks, _shutdown_tx, shutdown_rx) = harness();
        let provider = Arc::new(MockProvider::instant());
        let mut state = AppState::in_memory(None);
        process_message(&mut state, Message::MountPage, &tx, &provider, &tasks, &shutdown_rx);

        let mut weather = Vec::new();
        process_message_observed(
            &mut state,
            Message::Navigate(Page::Weather),
            &tx,
            &provider,
            &tasks,
            &shutdown_rx,
            |s| weather.push(s.board.phase(WidgetKind::Weather)),
        );

        assert_eq!(weather, vec![Phase::Idle, Phase::Loading]);
    }
}
