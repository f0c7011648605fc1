//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// First entry whose id matches, scanning in list order.
pub fn find_by_id<'a, E: Entity>(items: &'a [E], id: &E::Id) -> Option<&'a E> {
    items.iter().find(|entity| entity.id() == id)
}

/// Replace the list entry whose id matches `updated`, in place.
///
/// Returns `false` (and drops `updated`) when no entry matches; entries other
/// than the matching one keep their positions.
pub fn replace_by_id<E: Entity>(items: &mut [E], updated: E) -> bool {
    match items.iter_mut().find(|e| e.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
