//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use skydeck_core::ErrorInfo;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::provider::{self, DataProvider};
use crate::widget::MountId;

/// In-flight fetch tasks keyed by the mount they were issued for
pub type FetchTaskMap = Arc<std::sync::Mutex<HashMap<MountId, JoinHandle<()>>>>;

/// Execute an action by spawning background tasks
pub fn handle_action<P>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<P>,
    fetch_tasks: FetchTaskMap,
    shutdown_rx: watch::Receiver<bool>,
) where
    P: DataProvider + Sync + 'static,
{
    match action {
        UpdateAction::FetchWidgets { mounts } => {
            for mount in mounts {
                spawn_fetch(
                    mount,
                    provider.clone(),
                    msg_tx.clone(),
                    fetch_tasks.clone(),
                    shutdown_rx.clone(),
                );
            }
        }

        UpdateAction::CancelFetches { mounts } => {
            let mut tasks = match fetch_tasks.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            for mount in mounts {
                if let Some(handle) = tasks.remove(&mount) {
                    handle.abort();
                    trace!("Cancelled fetch for {}", mount);
                }
            }
        }
    }
}

/// Spawn one provider request for `mount` and report the outcome.
fn spawn_fetch<P>(
    mount: MountId,
    provider: Arc<P>,
    msg_tx: mpsc::Sender<Message>,
    fetch_tasks: FetchTaskMap,
    mut shutdown_rx: watch::Receiver<bool>,
) where
    P: DataProvider + Sync + 'static,
{
    let handle = tokio::spawn(async move {
        let outcome = tokio::select! {
            outcome = provider::fetch(provider.as_ref(), mount.kind) => outcome,
            Ok(()) = shutdown_rx.changed() => {
                debug!("Fetch for {} abandoned on shutdown", mount);
                return;
            }
        };

        let result = match outcome {
            Ok(Some(data)) => Ok(data),
            Ok(None) => {
                debug!("Provider returned nothing for {}", mount);
                Err(ErrorInfo::unavailable())
            }
            Err(e) => {
                warn!("Provider request for {} failed: {}", mount, e);
                Err(ErrorInfo::unavailable())
            }
        };

        let _ = msg_tx.send(Message::WidgetLoaded { mount, result }).await;
    });

    let mut tasks = match fetch_tasks.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    tasks.retain(|_, h| !h.is_finished());
    tasks.insert(mount, handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;
    use skydeck_core::{WidgetData, WidgetKind};
    use std::time::Duration;

    fn mount(kind: WidgetKind, generation: u64) -> MountId {
        MountId { kind, generation }
    }

    fn task_map() -> FetchTaskMap {
        Arc::new(std::sync::Mutex::new(HashMap::new()))
    }

    #[tokio::test]
    async fn test_fetch_reports_loaded_payload() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let tasks = task_map();

        handle_action(
            UpdateAction::FetchWidgets {
                mounts: vec![mount(WidgetKind::Activity, 1)],
            },
            tx,
            Arc::new(MockProvider::instant()),
            tasks.clone(),
            shutdown_rx,
        );

        match rx.recv().await {
            Some(Message::WidgetLoaded { mount: m, result }) => {
                assert_eq!(m, mount(WidgetKind::Activity, 1));
                assert!(matches!(result, Ok(WidgetData::Activity(_))));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_provider_error_reports_unavailable() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        handle_action(
            UpdateAction::FetchWidgets {
                mounts: vec![mount(WidgetKind::News, 3)],
            },
            tx,
            Arc::new(MockProvider::instant().with_unavailable(WidgetKind::News)),
            task_map(),
            shutdown_rx,
        );

        match rx.recv().await {
            Some(Message::WidgetLoaded { result, .. }) => {
                assert_eq!(result, Err(ErrorInfo::unavailable()));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_in_flight_fetch() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let tasks = task_map();
        let provider = Arc::new(MockProvider::new(Duration::from_millis(1000)));
        let id = mount(WidgetKind::Weather, 1);

        handle_action(
            UpdateAction::FetchWidgets { mounts: vec![id] },
            tx,
            provider.clone(),
            tasks.clone(),
            shutdown_rx.clone(),
        );
        assert!(tasks.lock().unwrap().contains_key(&id));

        let (unused_tx, _) = mpsc::channel(1);
        handle_action(
            UpdateAction::CancelFetches { mounts: vec![id] },
            unused_tx,
            provider,
            tasks.clone(),
            shutdown_rx,
        );
        assert!(tasks.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_abandons_fetch() {
        let (tx, mut rx) = mpsc::channel(8);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let tasks = task_map();

        handle_action(
            UpdateAction::FetchWidgets {
                mounts: vec![mount(WidgetKind::Finance, 1)],
            },
            tx,
            Arc::new(MockProvider::new(Duration::from_millis(1000))),
            tasks.clone(),
            shutdown_rx,
        );

        shutdown_tx.send(true).unwrap();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        assert!(rx.try_recv().is_err());
    }
}
