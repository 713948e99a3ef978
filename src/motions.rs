use ahash::HashMap;
use generational_arena::Arena;
use tracing::info;

use crate::motion::Motion;

/// Handle to a [Motion] stored in a [Motions] registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionId(generational_arena::Index);

/// In-memory registry of loaded motions, addressable by handle or by name.
#[derive(Default)]
pub struct Motions {
    motions: Arena<Motion>,
    lookup: HashMap<String, MotionId>,
}

impl Motions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a motion and return its handle. Registering a second motion
    /// under the same name points the name at the new one.
    pub fn insert(&mut self, motion: Motion) -> MotionId {
        let name = motion.name.clone();
        let id = MotionId(self.motions.insert(motion));
        self.lookup.insert(name.clone(), id);
        info!("Registered motion: {name}");
        id
    }

    #[inline]
    pub fn get(&self, id: MotionId) -> Option<&Motion> {
        self.motions.get(id.0)
    }

    #[inline]
    pub fn get_by_name(&self, name: &str) -> Option<MotionId> {
        self.lookup.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }
}
