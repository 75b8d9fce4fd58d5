//! Mount-scoped widget lifecycle
//!
//! Each mount gets a fresh [`MountId`]. Fetch completions carry the id they
//! were issued for and are applied only while that mount is current, so a
//! late response after unmount (or after a remount) is dropped.

use std::fmt;

use skydeck_core::prelude::*;
use skydeck_core::{ErrorInfo, Phase, WidgetKind, WidgetState};

/// Identity of one mount of one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId {
    pub kind: WidgetKind,
    pub generation: u64,
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.generation)
    }
}

/// Hosts a [`WidgetState`] across mounts.
#[derive(Debug, Clone)]
pub struct WidgetHost<T> {
    kind: WidgetKind,
    state: WidgetState<T>,
    mount: Option<MountId>,
    next_generation: u64,
}

impl<T> WidgetHost<T> {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            state: WidgetState::new(),
            mount: None,
            next_generation: 1,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn state(&self) -> &WidgetState<T> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn mount_id(&self) -> Option<MountId> {
        self.mount
    }

    /// Start a new mount: restart from `Idle` and move to `Loading`.
    ///
    /// The caller issues exactly one request tagged with the returned id.
    /// Mounting while already mounted replaces the previous mount.
    pub fn mount(&mut self) -> MountId {
        if let Some(previous) = self.mount.take() {
            debug!("Remounting {} (dropping {})", self.kind, previous);
        }

        let id = MountId {
            kind: self.kind,
            generation: self.next_generation,
        };
        self.next_generation += 1;

        self.state.reset();
        let started = self.state.begin_loading();
        debug_assert!(started, "fresh mount must start from Idle");
        self.mount = Some(id);

        trace!("Mounted {}", id);
        id
    }

    /// End the current mount. Pending completions for it become stale.
    pub fn unmount(&mut self) -> Option<MountId> {
        let previous = self.mount.take();
        if let Some(id) = previous {
            trace!("Unmounted {} in phase {:?}", id, self.state.phase());
        }
        self.state.reset();
        previous
    }

    /// Apply a fetch outcome. Returns `false` when the mount is no longer
    /// current or the mount has already completed.
    pub fn complete(
        &mut self,
        mount: MountId,
        outcome: std::result::Result<T, ErrorInfo>,
    ) -> bool {
        if self.mount != Some(mount) {
            debug!(
                "Discarding stale {} completion (current: {:?})",
                mount, self.mount
            );
            return false;
        }
        if !self.state.complete(outcome) {
            debug!("Ignoring duplicate completion for {}", mount);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_starts_loading() {
        let mut host: WidgetHost<u32> = WidgetHost::new(WidgetKind::Weather);
        assert_eq!(host.phase(), Phase::Idle);

        let id = host.mount();
        assert_eq!(id.kind, WidgetKind::Weather);
        assert_eq!(host.phase(), Phase::Loading);
        assert_eq!(host.mount_id(), Some(id));
    }

    #[test]
    fn test_completion_after_unmount_is_discarded() {
        let mut host: WidgetHost<u32> = WidgetHost::new(WidgetKind::News);
        let id = host.mount();
        host.unmount();

        assert!(!host.complete(id, Ok(42)));
        assert_eq!(host.phase(), Phase::Idle);
        assert!(host.state().data().is_none());
    }

    #[test]
    fn test_completion_for_previous_mount_is_discarded() {
        let mut host: WidgetHost<u32> = WidgetHost::new(WidgetKind::Finance);
        let first = host.mount();
        host.unmount();
        let second = host.mount();
        assert_ne!(first, second);

        assert!(!host.complete(first, Ok(1)));
        assert_eq!(host.phase(), Phase::Loading);

        assert!(host.complete(second, Ok(2)));
        assert_eq!(host.state().data(), Some(&2));
    }

    #[test]
    fn test_second_completion_for_same_mount_is_ignored() {
        let mut host: WidgetHost<u32> = WidgetHost::new(WidgetKind::Activity);
        let id = host.mount();

        assert!(host.complete(id, Err(ErrorInfo::unavailable())));
        assert!(!host.complete(id, Ok(9)));
        assert_eq!(host.phase(), Phase::Failed);
        assert!(host.state().data().is_none());
    }

    #[test]
    fn test_remount_restarts_lifecycle() {
        let mut host: WidgetHost<u32> = WidgetHost::new(WidgetKind::Weather);
        let id = host.mount();
        assert!(host.complete(id, Ok(1)));

        host.unmount();
        assert_eq!(host.phase(), Phase::Idle);

        host.mount();
        assert_eq!(host.phase(), Phase::Loading);
        assert!(host.state().data().is_none());
    }
}
