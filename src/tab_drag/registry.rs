use super::types::ContainerId;

/// The set of tab strips that accept drops, in registration order.
///
/// Owned by [`super::TabWindows`]; containers enter lazily (first drag, or creation by a
/// detach) and leave when their window closes.
#[derive(Debug, Default)]
pub struct TabContainerRegistry {
    order: Vec<ContainerId>,
    members: ahash::HashSet<ContainerId>,
}

impl TabContainerRegistry {
    /// Returns `true` if the container was not registered before.
    pub fn register(&mut self, container: ContainerId) -> bool {
        if !self.members.insert(container) {
            return false;
        }
        self.order.push(container);
        log::debug!("registry: register {container:?} (now {})", self.order.len());
        true
    }

    /// Returns `true` if the container was registered.
    pub fn deregister(&mut self, container: ContainerId) -> bool {
        if !self.members.remove(&container) {
            return false;
        }
        self.order.retain(|&c| c != container);
        log::debug!("registry: deregister {container:?} (now {})", self.order.len());
        true
    }

    pub fn contains(&self, container: ContainerId) -> bool {
        self.members.contains(&container)
    }

    pub fn iter(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
