//! Control identifiers.

use slotmap::new_key_type;

new_key_type! {
    /// A stable handle to a control in a control tree.
    ///
    /// `ControlId`s are generational: once a control is destroyed its handle
    /// never resolves again, even if the slot is reused by a new control.
    pub struct ControlId;
}

impl ControlId {
    /// Convert the id to a raw u64 value.
    ///
    /// Useful for interop with collaborators that key state by a number
    /// (skins, input routers). Convert back with [`ControlId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a ControlId from a raw u64 value.
    ///
    /// This does not check that the id is alive in any tree.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

static_assertions::assert_impl_all!(ControlId: Copy, Send, Sync, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip() {
        let mut map: SlotMap<ControlId, ()> = SlotMap::with_key();
        let id = map.insert(());
        assert_eq!(ControlId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_stale_id_does_not_resolve() {
        let mut map: SlotMap<ControlId, u32> = SlotMap::with_key();
        let first = map.insert(1);
        map.remove(first);
        let second = map.insert(2);
        assert_ne!(first, second);
        assert!(map.get(first).is_none());
    }
}
