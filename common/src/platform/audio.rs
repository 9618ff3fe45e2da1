use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::games::GameMode;
use crate::{log, warn};

pub const DEFAULT_MUSIC_VOLUME: f32 = 0.18;

/// Looping background track, one per game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Colors,
    Numbers,
    Pi,
}

impl MusicTrack {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Colors => MusicTrack::Colors,
            GameMode::Numbers => MusicTrack::Numbers,
            GameMode::Pi => MusicTrack::Pi,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MusicTrack::Colors => "colors",
            MusicTrack::Numbers => "numbers",
            MusicTrack::Pi => "pi",
        }
    }
}

impl fmt::Display for MusicTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait AudioBackend: Send {
    fn load(&mut self, track: MusicTrack) -> Result<(), String>;
    fn unload(&mut self);
    fn play(&mut self) -> Result<(), String>;
    fn pause(&mut self);
    /// Called with a value already clamped to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);
}

/// Backend for builds without an audio device.
#[derive(Debug, Default)]
pub struct NullAudioBackend {
    track: Option<MusicTrack>,
}

impl AudioBackend for NullAudioBackend {
    fn load(&mut self, track: MusicTrack) -> Result<(), String> {
        log!("Music track {} loaded (silent)", track);
        self.track = Some(track);
        Ok(())
    }

    fn unload(&mut self) {
        self.track = None;
    }

    fn play(&mut self) -> Result<(), String> {
        match self.track {
            Some(_) => Ok(()),
            None => Err("no track loaded".to_string()),
        }
    }

    fn pause(&mut self) {}

    fn set_volume(&mut self, _volume: f32) {}
}

struct AudioState<B: AudioBackend> {
    backend: B,
    track: Option<MusicTrack>,
    listeners: usize,
    enabled: bool,
    suspended: bool,
    playing: bool,
    volume: f32,
}

impl<B: AudioBackend> AudioState<B> {
    fn switch_to(&mut self, track: MusicTrack) {
        if self.track == Some(track) {
            return;
        }
        if self.track.is_some() {
            self.stop_and_unload();
        }
        match self.backend.load(track) {
            Ok(()) => {
                self.backend.set_volume(self.volume);
                self.track = Some(track);
            }
            Err(e) => warn!("Failed to load music track {}: {}", track, e),
        }
    }

    fn stop_and_unload(&mut self) {
        if self.playing {
            self.backend.pause();
            self.playing = false;
        }
        self.backend.unload();
        self.track = None;
    }

    fn sync_playback(&mut self) {
        let should_play = self.track.is_some() && self.enabled && !self.suspended && self.listeners > 0;
        if should_play && !self.playing {
            match self.backend.play() {
                Ok(()) => self.playing = true,
                Err(e) => warn!("Failed to start music: {}", e),
            }
        } else if !should_play && self.playing {
            self.backend.pause();
            self.playing = false;
        }
    }
}

/// Background music shared by every screen that wants it.
///
/// Each screen holds a [`MusicGuard`]; the track stays loaded while at least
/// one guard is alive and is unloaded when the last one drops.
pub struct AudioSession<B: AudioBackend> {
    state: Arc<Mutex<AudioState<B>>>,
}

impl<B: AudioBackend> Clone for AudioSession<B> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<B: AudioBackend> AudioSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_volume(backend, DEFAULT_MUSIC_VOLUME)
    }

    pub fn with_volume(backend: B, volume: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(AudioState {
                backend,
                track: None,
                listeners: 0,
                enabled: true,
                suspended: false,
                playing: false,
                volume: volume.clamp(0.0, 1.0),
            })),
        }
    }

    /// Registers a listener for `track`. Switching tracks unloads the previous one.
    pub fn acquire(&self, track: MusicTrack, enabled: bool) -> MusicGuard<B> {
        let mut state = lock(&self.state);
        state.listeners += 1;
        state.enabled = enabled;
        state.switch_to(track);
        state.sync_playback();
        log!("Music listener added ({} active)", state.listeners);

        MusicGuard {
            state: Arc::clone(&self.state),
            track,
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        let mut state = lock(&self.state);
        state.enabled = enabled;
        state.sync_playback();
    }

    /// App moved to the background.
    pub fn suspend(&self) {
        let mut state = lock(&self.state);
        state.suspended = true;
        state.sync_playback();
    }

    pub fn resume(&self) {
        let mut state = lock(&self.state);
        state.suspended = false;
        state.sync_playback();
    }

    pub fn set_volume(&self, volume: f32) {
        let mut state = lock(&self.state);
        state.volume = volume.clamp(0.0, 1.0);
        let volume = state.volume;
        state.backend.set_volume(volume);
    }

    pub fn volume(&self) -> f32 {
        lock(&self.state).volume
    }

    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    pub fn current_track(&self) -> Option<MusicTrack> {
        lock(&self.state).track
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.state).listeners
    }
}

pub struct MusicGuard<B: AudioBackend> {
    state: Arc<Mutex<AudioState<B>>>,
    track: MusicTrack,
}

impl<B: AudioBackend> MusicGuard<B> {
    pub fn track(&self) -> MusicTrack {
        self.track
    }
}

impl<B: AudioBackend> Drop for MusicGuard<B> {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        state.listeners = state.listeners.saturating_sub(1);
        if state.listeners == 0 {
            log!("Last music listener gone, unloading");
            state.stop_and_unload();
        }
    }
}

fn lock<B: AudioBackend>(state: &Mutex<AudioState<B>>) -> MutexGuard<'_, AudioState<B>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Load(MusicTrack),
        Unload,
        Play,
        Pause,
        Volume(f32),
    }

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<Call>>>);

    impl Recording {
        fn take(&self) -> Vec<Call> {
            std::mem::take(&mut *self.0.lock().unwrap())
        }
    }

    impl AudioBackend for Recording {
        fn load(&mut self, track: MusicTrack) -> Result<(), String> {
            self.0.lock().unwrap().push(Call::Load(track));
            Ok(())
        }

        fn unload(&mut self) {
            self.0.lock().unwrap().push(Call::Unload);
        }

        fn play(&mut self) -> Result<(), String> {
            self.0.lock().unwrap().push(Call::Play);
            Ok(())
        }

        fn pause(&mut self) {
            self.0.lock().unwrap().push(Call::Pause);
        }

        fn set_volume(&mut self, volume: f32) {
            self.0.lock().unwrap().push(Call::Volume(volume));
        }
    }

    #[test]
    fn test_first_enabled_listener_starts_playback() {
        let calls = Recording::default();
        let audio = AudioSession::new(calls.clone());
        let guard = audio.acquire(MusicTrack::Pi, true);

        assert!(audio.is_playing());
        assert_eq!(
            calls.take(),
            vec![Call::Load(MusicTrack::Pi), Call::Volume(DEFAULT_MUSIC_VOLUME), Call::Play]
        );

        drop(guard);
        assert!(!audio.is_playing());
        assert_eq!(audio.current_track(), None);
        assert_eq!(calls.take(), vec![Call::Pause, Call::Unload]);
    }

    #[test]
    fn test_disabled_listener_loads_without_playing() {
        let calls = Recording::default();
        let audio = AudioSession::new(calls.clone());
        let _guard = audio.acquire(MusicTrack::Colors, false);
        assert!(!audio.is_playing());
        assert_eq!(audio.current_track(), Some(MusicTrack::Colors));

        audio.set_enabled(true);
        assert!(audio.is_playing());
    }

    #[test]
    fn test_track_survives_until_last_guard() {
        let calls = Recording::default();
        let audio = AudioSession::new(calls.clone());
        let first = audio.acquire(MusicTrack::Pi, true);
        let second = audio.acquire(MusicTrack::Pi, true);
        calls.take();

        drop(first);
        assert!(audio.is_playing());
        assert_eq!(audio.listener_count(), 1);
        assert!(calls.take().is_empty());

        drop(second);
        assert_eq!(audio.listener_count(), 0);
        assert!(!audio.is_playing());
    }

    #[test]
    fn test_new_mode_switches_track() {
        let calls = Recording::default();
        let audio = AudioSession::new(calls.clone());
        let _pi = audio.acquire(MusicTrack::Pi, true);
        calls.take();

        let _colors = audio.acquire(MusicTrack::Colors, true);
        assert_eq!(audio.current_track(), Some(MusicTrack::Colors));
        assert_eq!(
            calls.take(),
            vec![
                Call::Pause,
                Call::Unload,
                Call::Load(MusicTrack::Colors),
                Call::Volume(DEFAULT_MUSIC_VOLUME),
                Call::Play
            ]
        );
    }

    #[test]
    fn test_suspend_and_resume() {
        let audio = AudioSession::new(NullAudioBackend::default());
        let _guard = audio.acquire(MusicTrack::Numbers, true);
        audio.suspend();
        assert!(!audio.is_playing());
        audio.resume();
        assert!(audio.is_playing());
    }

    #[test]
    fn test_volume_is_clamped() {
        let audio = AudioSession::new(NullAudioBackend::default());
        assert_eq!(audio.volume(), DEFAULT_MUSIC_VOLUME);
        audio.set_volume(1.7);
        assert_eq!(audio.volume(), 1.0);
        audio.set_volume(-0.3);
        assert_eq!(audio.volume(), 0.0);
    }
}
