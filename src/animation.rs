use std::{collections::HashMap, time::Duration};

// ---------------------------------------------------------------------------------------------------------------------

/// A named sequence of spritesheet frame indices played back at a fixed rate.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub frames: Vec<u32>,
    pub frame_rate: f32,
    pub looping: bool,
}

impl Animation {
    pub fn new(frames: Vec<u32>, frame_rate: f32, looping: bool) -> Self {
        assert!(!frames.is_empty(), "Animation requires at least one frame");
        Self {
            frames,
            frame_rate,
            looping,
        }
    }

    /// Frames `first..=last` of a spritesheet
    pub fn range(first: u32, last: u32, frame_rate: f32, looping: bool) -> Self {
        Self::new((first..=last).collect(), frame_rate, looping)
    }

    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

// ---------------------------------------------------------------------------------------------------------------------

/// Plays animations from a shared set of definitions, keyed by `K`.
#[derive(Debug)]
pub struct AnimationPlayer<K> {
    animations: HashMap<K, Animation>,
    current: Option<K>,
    frame_index: usize,
    time: f32,
}

impl<K> AnimationPlayer<K>
where
    K: Copy + Eq + std::hash::Hash + std::fmt::Debug,
{
    pub fn new(animations: HashMap<K, Animation>) -> Self {
        Self {
            animations,
            current: None,
            frame_index: 0,
            time: 0.0,
        }
    }

    /// Starts playing `key` from its first frame. When `ignore_if_playing` is set and `key` is
    /// already the current animation, playback continues uninterrupted.
    pub fn play(&mut self, key: K, ignore_if_playing: bool) {
        if ignore_if_playing && self.current == Some(key) {
            return;
        }
        if !self.animations.contains_key(&key) {
            log::warn!("AnimationPlayer::play - no animation registered for {:?}", key);
            return;
        }
        self.current = Some(key);
        self.frame_index = 0;
        self.time = 0.0;
    }

    pub fn current(&self) -> Option<K> {
        self.current
    }

    pub fn update(&mut self, dt: Duration) {
        let animation = match self.current.and_then(|k| self.animations.get(&k)) {
            Some(animation) => animation,
            None => return,
        };

        self.time += dt.as_secs_f32();
        let frame_duration = animation.frame_duration();
        while self.time >= frame_duration {
            self.time -= frame_duration;
            if self.frame_index + 1 < animation.frames.len() {
                self.frame_index += 1;
            } else if animation.looping {
                self.frame_index = 0;
            }
        }
    }

    /// The spritesheet frame currently showing, if anything is playing
    pub fn frame(&self) -> Option<u32> {
        self.current
            .and_then(|k| self.animations.get(&k))
            .map(|a| a.frames[self.frame_index])
    }
}
