use crate::interpolate::Interpolate;

/// How a track resolves a value between key frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SampleMode {
    /// Hold the selected key frame's value unchanged.
    #[default]
    Nearest,
    /// Interpolate between the selected key frame and its successor.
    Linear,
}

#[derive(Clone, Copy, Debug)]
pub struct Key<V> {
    pub tick: u32,
    pub value: V,
}

/// Tick-ordered key frame sequence for a single bone.
#[derive(Clone, Debug, Default)]
pub struct Track<V: Interpolate> {
    keys: Vec<Key<V>>,
}

impl<V: Interpolate> Track<V> {
    pub fn insert(&mut self, tick: u32, value: V) {
        match self.keys.binary_search_by_key(&tick, |k| k.tick) {
            Ok(i) => self.keys[i].value = value,                // last wins
            Err(i) => self.keys.insert(i, Key { tick, value }), // keep sorted
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Tick of the last key frame.
    #[inline]
    pub fn last_tick(&self) -> Option<u32> {
        self.keys.last().map(|k| k.tick)
    }

    /// Index of the key frame active at `tick`: the key immediately before
    /// the first key whose tick is strictly greater than `tick`. When `tick`
    /// precedes the whole track, or reaches past its end, the last key is
    /// selected.
    pub fn key_index(&self, tick: u32) -> Option<usize> {
        if self.keys.is_empty() {
            return None;
        }

        let next = self.keys.partition_point(|k| k.tick <= tick);
        if next == 0 || next >= self.keys.len() {
            Some(self.keys.len() - 1)
        } else {
            Some(next - 1)
        }
    }

    /// Value of the track at `tick`, or `None` for an empty track.
    pub fn sample(&self, tick: u32, mode: SampleMode) -> Option<V> {
        let index = self.key_index(tick)?;
        let key = self.keys[index];

        match mode {
            SampleMode::Nearest => Some(key.value),
            SampleMode::Linear => {
                // The selected key has no successor when `tick` falls outside
                // the track's range; hold its value.
                let Some(next) = self.keys.get(index + 1) else {
                    return Some(key.value);
                };

                let span = (next.tick - key.tick) as f32;
                let n = ((tick - key.tick) as f32 / span).clamp(0.0, 1.0);
                Some(V::interpolate(key.value, next.value, n))
            }
        }
    }
}
