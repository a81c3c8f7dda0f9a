//! Sound cue dispatch
//!
//! The simulation never touches audio. After each tick the dispatcher turns
//! [`GameEvent`]s into cues on an [`AudioPlayer`] and keeps the thrust loop in
//! step with the thrust key.

#[cfg(feature = "frontend")]
pub mod backend;
pub mod synth;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Bullet fired
    Shoot,
    /// Engine hum, played on a loop while thrusting
    Thrust,
    /// Large asteroid or the ship exploding
    BangLarge,
    BangMedium,
    BangSmall,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Shoot,
        SoundCue::Thrust,
        SoundCue::BangLarge,
        SoundCue::BangMedium,
        SoundCue::BangSmall,
    ];

    /// Explosion cue for an asteroid size class
    pub fn explosion(size: u8) -> Self {
        match size {
            3.. => SoundCue::BangLarge,
            2 => SoundCue::BangMedium,
            _ => SoundCue::BangSmall,
        }
    }

    /// One-shot cue for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Fired => Some(SoundCue::Shoot),
            GameEvent::AsteroidDestroyed { size, .. } => Some(Self::explosion(*size)),
            GameEvent::ShipDestroyed { .. } => Some(SoundCue::BangLarge),
            GameEvent::GameOver { .. } | GameEvent::LevelStarted { .. } => None,
        }
    }
}

/// Reserved playback channels for looping sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Thrust,
}

/// An audio output that can play pre-synthesized cues
pub trait AudioPlayer {
    /// Fire-and-forget playback on any free voice
    fn play(&mut self, cue: SoundCue);

    /// Loop `cue` on `channel` until stopped
    fn play_looping(&mut self, channel: Channel, cue: SoundCue);

    /// Silence `channel`
    fn stop(&mut self, channel: Channel);

    fn is_playing(&self, channel: Channel) -> bool;
}

/// Routes tick events to an [`AudioPlayer`]
pub struct AudioDispatcher<P: AudioPlayer> {
    player: P,
}

impl<P: AudioPlayer> AudioDispatcher<P> {
    pub fn new(player: P) -> Self {
        Self { player }
    }

    /// Play the cues for one tick's events and start/stop the thrust loop
    pub fn dispatch(&mut self, events: &[GameEvent], thrusting: bool) {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.player.play(cue);
        }

        if thrusting {
            if !self.player.is_playing(Channel::Thrust) {
                self.player.play_looping(Channel::Thrust, SoundCue::Thrust);
            }
        } else if self.player.is_playing(Channel::Thrust) {
            self.player.stop(Channel::Thrust);
        }
    }

    /// Stop every looping channel
    pub fn silence(&mut self) {
        self.player.stop(Channel::Thrust);
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}
