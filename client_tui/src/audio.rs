//! Audio settings and cue dispatch.
//!
//! The settings are a plain value object owned by the application and handed
//! to presentation collaborators by reference; the simulation core never
//! sees them. Cues go through a [`SoundSink`] so the terminal build can ring
//! the bell while tests use a recording sink.

use std::io::Write;

use match_core::Events;
use serde::{Deserialize, Serialize};

/// Music/effects volumes and mutes, persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub music_volume: f32,
    pub sfx_volume: f32,
    pub music_muted: bool,
    pub sfx_muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            sfx_volume: 0.5,
            music_muted: false,
            sfx_muted: false,
        }
    }
}

impl AudioSettings {
    pub fn effective_sfx(&self) -> f32 {
        if self.sfx_muted {
            0.0
        } else {
            self.sfx_volume
        }
    }

    pub fn effective_music(&self) -> f32 {
        if self.music_muted {
            0.0
        } else {
            self.music_volume
        }
    }

    pub fn nudge_music(&mut self, delta: f32) {
        self.music_volume = (self.music_volume + delta).clamp(0.0, 1.0);
    }

    pub fn nudge_sfx(&mut self, delta: f32) {
        self.sfx_volume = (self.sfx_volume + delta).clamp(0.0, 1.0);
    }
}

/// The game's sound effects, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Hit,
    Score,
    Countdown,
}

/// Playback backend for cues.
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Rings the terminal bell for every audible cue. Crude, but it is the one
/// sound a plain terminal can make.
#[derive(Debug, Default)]
pub struct BellSink;

impl SoundSink for BellSink {
    fn play(&mut self, _cue: SoundCue, volume: f32) {
        if volume > 0.0 {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

/// Swallows every cue.
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _cue: SoundCue, _volume: f32) {}
}

/// Maps game and UI moments onto cues, gated by the settings.
pub struct AudioCues {
    sink: Box<dyn SoundSink>,
}

impl AudioCues {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self { sink }
    }

    pub fn ui_click(&mut self, settings: &AudioSettings) {
        self.play(SoundCue::Click, settings);
    }

    /// Forward this tick's simulation events.
    pub fn frame_events(&mut self, settings: &AudioSettings, events: &Events) {
        if events.paddle_hit.is_some() {
            self.play(SoundCue::Hit, settings);
        }
        if events.scored.is_some() {
            self.play(SoundCue::Score, settings);
        }
        if events.countdown_cue.is_some() {
            self.play(SoundCue::Countdown, settings);
        }
    }

    fn play(&mut self, cue: SoundCue, settings: &AudioSettings) {
        let volume = settings.effective_sfx();
        if volume > 0.0 {
            self.sink.play(cue, volume);
        }
    }
}
