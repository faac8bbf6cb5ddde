//! Audio feedback
//!
//! Two clips give feedback on taps: `right` for a correct tap and `wrong`
//! for a miss. Audio is best-effort. Load and playback failures are logged
//! at the call site and never reach the game state.
//!
//! # Architecture
//!
//! - [`AudioBackend`]: load / play / release contract for an output device
//! - [`FeedbackSounds`]: owns the two handles for the lifetime of the screen
//!   and applies the catch-and-log policy
//! - Backends: [`BellBackend`] (terminal bell), [`SilentBackend`], and
//!   `RodioBackend` with the `rodio-audio` feature

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{AudioBackendKind, AudioConfig};
use crate::error::AudioError;

/// Logical sound clip name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundClip {
    Correct,
    Incorrect,
}

impl SoundClip {
    pub const ALL: [SoundClip; 2] = [SoundClip::Correct, SoundClip::Incorrect];

    pub fn name(self) -> &'static str {
        match self {
            SoundClip::Correct => "right",
            SoundClip::Incorrect => "wrong",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.mp3", self.name())
    }
}

impl fmt::Display for SoundClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque handle to a loaded clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundHandle(pub u32);

/// Audio output device
///
/// `play` must return promptly; backends hand decoded audio to the device
/// and do not wait for it to finish.
pub trait AudioBackend {
    /// Load the clip stored at `path`
    fn load(&mut self, clip: SoundClip, path: &Path) -> Result<SoundHandle, AudioError>;

    /// Start playing a loaded clip from the beginning
    fn play(&mut self, handle: SoundHandle) -> Result<(), AudioError>;

    /// Free a loaded clip
    fn release(&mut self, handle: SoundHandle);
}

/// Feedback clips for the game screen
///
/// Handles are released when this value is dropped.
pub struct FeedbackSounds {
    backend: Box<dyn AudioBackend>,
    correct: Option<SoundHandle>,
    incorrect: Option<SoundHandle>,
}

impl FeedbackSounds {
    /// Load both clips from `asset_dir`
    ///
    /// A clip that fails to load stays unplayable; the failure is logged.
    pub fn load(mut backend: Box<dyn AudioBackend>, asset_dir: &Path) -> Self {
        let mut load = |clip: SoundClip| {
            let path = asset_dir.join(clip.file_name());
            match backend.load(clip, &path) {
                Ok(handle) => {
                    tracing::debug!(clip = %clip, path = %path.display(), "Loaded sound");
                    Some(handle)
                }
                Err(e) => {
                    tracing::error!(clip = %clip, error = %e, "Error loading sound");
                    None
                }
            }
        };

        let correct = load(SoundClip::Correct);
        let incorrect = load(SoundClip::Incorrect);

        Self {
            backend,
            correct,
            incorrect,
        }
    }

    /// Build the configured backend and load both clips
    pub fn from_config(config: &AudioConfig) -> Self {
        let kind = if config.enabled {
            config.backend
        } else {
            AudioBackendKind::Silent
        };
        Self::load(backend_for(kind), &config.asset_path())
    }

    /// No backend at all; every clip is unavailable
    pub fn disabled() -> Self {
        Self {
            backend: Box::new(SilentBackend::default()),
            correct: None,
            incorrect: None,
        }
    }

    pub fn is_loaded(&self, clip: SoundClip) -> bool {
        self.handle(clip).is_some()
    }

    /// Play `clip`, logging instead of failing
    pub fn play(&mut self, clip: SoundClip) {
        let Some(handle) = self.handle(clip) else {
            tracing::warn!(clip = %clip, "Sound is not loaded, skipping playback");
            return;
        };

        if let Err(e) = self.backend.play(handle) {
            tracing::error!(clip = %clip, error = %e, "Error playing sound");
        }
    }

    fn handle(&self, clip: SoundClip) -> Option<SoundHandle> {
        match clip {
            SoundClip::Correct => self.correct,
            SoundClip::Incorrect => self.incorrect,
        }
    }
}

impl Drop for FeedbackSounds {
    fn drop(&mut self) {
        for handle in [self.correct.take(), self.incorrect.take()].into_iter().flatten() {
            self.backend.release(handle);
        }
    }
}

impl fmt::Debug for FeedbackSounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedbackSounds")
            .field("correct", &self.correct)
            .field("incorrect", &self.incorrect)
            .finish()
    }
}

/// Construct a backend of the requested kind, falling back when unavailable
pub fn backend_for(kind: AudioBackendKind) -> Box<dyn AudioBackend> {
    match kind {
        AudioBackendKind::Silent => Box::new(SilentBackend::default()),
        AudioBackendKind::Bell => Box::new(BellBackend::default()),
        #[cfg(feature = "rodio-audio")]
        AudioBackendKind::Rodio => match rodio_backend::RodioBackend::new() {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                tracing::error!(error = %e, "No audio output device, falling back to bell");
                Box::new(BellBackend::default())
            }
        },
        #[cfg(not(feature = "rodio-audio"))]
        AudioBackendKind::Rodio => {
            tracing::warn!("Built without the rodio-audio feature, falling back to bell");
            Box::new(BellBackend::default())
        }
    }
}

/// Accepts every clip and plays nothing
#[derive(Debug, Default)]
pub struct SilentBackend {
    next_id: u32,
}

impl AudioBackend for SilentBackend {
    fn load(&mut self, _clip: SoundClip, _path: &Path) -> Result<SoundHandle, AudioError> {
        self.next_id += 1;
        Ok(SoundHandle(self.next_id))
    }

    fn play(&mut self, _handle: SoundHandle) -> Result<(), AudioError> {
        Ok(())
    }

    fn release(&mut self, _handle: SoundHandle) {}
}

/// Rings the terminal bell
///
/// The clip file must exist and is read at load time, but only its name
/// matters for playback. A miss rings twice so the two outcomes can be told
/// apart.
#[derive(Debug, Default)]
pub struct BellBackend {
    clips: Vec<(SoundHandle, SoundClip)>,
    next_id: u32,
}

impl AudioBackend for BellBackend {
    fn load(&mut self, clip: SoundClip, path: &Path) -> Result<SoundHandle, AudioError> {
        read_asset(clip, path)?;

        self.next_id += 1;
        let handle = SoundHandle(self.next_id);
        self.clips.push((handle, clip));
        Ok(handle)
    }

    fn play(&mut self, handle: SoundHandle) -> Result<(), AudioError> {
        let clip = self
            .clips
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, clip)| *clip)
            .ok_or(AudioError::UnknownHandle)?;

        let bell: &[u8] = match clip {
            SoundClip::Correct => b"\x07",
            SoundClip::Incorrect => b"\x07\x07",
        };

        let mut stdout = std::io::stdout();
        stdout
            .write_all(bell)
            .and_then(|_| stdout.flush())
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    fn release(&mut self, handle: SoundHandle) {
        self.clips.retain(|(h, _)| *h != handle);
    }
}

/// Read a clip's bytes, mapping a missing file to [`AudioError::AssetMissing`]
pub fn read_asset(clip: SoundClip, path: &Path) -> Result<Vec<u8>, AudioError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AudioError::AssetMissing {
            clip,
            path: PathBuf::from(path),
        }),
        Err(e) => Err(AudioError::Io(e)),
    }
}

#[cfg(feature = "rodio-audio")]
pub mod rodio_backend {
    //! Decoded playback on the default output device

    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::{read_asset, AudioBackend, SoundClip, SoundHandle};
    use crate::error::AudioError;

    pub struct RodioBackend {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: HashMap<SoundHandle, Arc<[u8]>>,
        next_id: u32,
    }

    impl RodioBackend {
        pub fn new() -> Result<Self, AudioError> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| AudioError::Playback(e.to_string()))?;
            Ok(Self {
                _stream: stream,
                handle,
                clips: HashMap::new(),
                next_id: 0,
            })
        }
    }

    impl AudioBackend for RodioBackend {
        fn load(&mut self, clip: SoundClip, path: &Path) -> Result<SoundHandle, AudioError> {
            let bytes: Arc<[u8]> = read_asset(clip, path)?.into();

            // Decode once up front so a corrupt file fails at load time
            Decoder::new(Cursor::new(Arc::clone(&bytes)))
                .map_err(|e| AudioError::Decode(e.to_string()))?;

            self.next_id += 1;
            let handle = SoundHandle(self.next_id);
            self.clips.insert(handle, bytes);
            Ok(handle)
        }

        fn play(&mut self, handle: SoundHandle) -> Result<(), AudioError> {
            let bytes = self.clips.get(&handle).ok_or(AudioError::UnknownHandle)?;
            let source = Decoder::new(Cursor::new(Arc::clone(bytes)))
                .map_err(|e| AudioError::Decode(e.to_string()))?;
            let sink = Sink::try_new(&self.handle).map_err(|e| AudioError::Playback(e.to_string()))?;
            sink.append(source);
            sink.detach();
            Ok(())
        }

        fn release(&mut self, handle: SoundHandle) {
            self.clips.remove(&handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Load(SoundClip),
        Play(SoundHandle),
        Release(SoundHandle),
    }

    /// Records calls; can be told to fail loads or plays
    #[derive(Default)]
    struct RecordingBackend {
        calls: Rc<RefCell<Vec<Call>>>,
        fail_load: Option<SoundClip>,
        fail_play: bool,
    }

    impl AudioBackend for RecordingBackend {
        fn load(&mut self, clip: SoundClip, path: &Path) -> Result<SoundHandle, AudioError> {
            self.calls.borrow_mut().push(Call::Load(clip));
            if self.fail_load == Some(clip) {
                return Err(AudioError::AssetMissing {
                    clip,
                    path: path.to_path_buf(),
                });
            }
            Ok(SoundHandle(match clip {
                SoundClip::Correct => 1,
                SoundClip::Incorrect => 2,
            }))
        }

        fn play(&mut self, handle: SoundHandle) -> Result<(), AudioError> {
            self.calls.borrow_mut().push(Call::Play(handle));
            if self.fail_play {
                return Err(AudioError::Playback("device busy".to_string()));
            }
            Ok(())
        }

        fn release(&mut self, handle: SoundHandle) {
            self.calls.borrow_mut().push(Call::Release(handle));
        }
    }

    #[test]
    fn test_clip_names() {
        assert_eq!(SoundClip::Correct.file_name(), "right.mp3");
        assert_eq!(SoundClip::Incorrect.file_name(), "wrong.mp3");
        assert_eq!(SoundClip::Incorrect.to_string(), "wrong");
    }

    #[test]
    fn test_load_and_play_both_clips() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            ..Default::default()
        };

        let mut sounds = FeedbackSounds::load(Box::new(backend), Path::new("assets/audio"));
        assert!(sounds.is_loaded(SoundClip::Correct));
        assert!(sounds.is_loaded(SoundClip::Incorrect));

        sounds.play(SoundClip::Incorrect);
        assert_eq!(calls.borrow().last(), Some(&Call::Play(SoundHandle(2))));
    }

    #[test]
    fn test_failed_load_leaves_clip_unplayable() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            fail_load: Some(SoundClip::Correct),
            ..Default::default()
        };

        let mut sounds = FeedbackSounds::load(Box::new(backend), Path::new("missing"));
        assert!(!sounds.is_loaded(SoundClip::Correct));
        assert!(sounds.is_loaded(SoundClip::Incorrect));

        // Skipped without reaching the backend
        sounds.play(SoundClip::Correct);
        assert!(!calls.borrow().iter().any(|c| matches!(c, Call::Play(_))));
    }

    #[test]
    fn test_play_failure_is_swallowed() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            fail_play: true,
            ..Default::default()
        };

        let mut sounds = FeedbackSounds::load(Box::new(backend), Path::new("assets/audio"));
        sounds.play(SoundClip::Correct);
        sounds.play(SoundClip::Correct);

        let plays = calls.borrow().iter().filter(|c| matches!(c, Call::Play(_))).count();
        assert_eq!(plays, 2);
    }

    #[test]
    fn test_drop_releases_loaded_handles() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            calls: Rc::clone(&calls),
            fail_load: Some(SoundClip::Incorrect),
            ..Default::default()
        };

        let sounds = FeedbackSounds::load(Box::new(backend), Path::new("assets/audio"));
        drop(sounds);

        let releases: Vec<Call> = calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Release(_)))
            .cloned()
            .collect();
        assert_eq!(releases, vec![Call::Release(SoundHandle(1))]);
    }

    #[test]
    fn test_disabled_has_no_clips() {
        let mut sounds = FeedbackSounds::disabled();
        assert!(!sounds.is_loaded(SoundClip::Correct));
        sounds.play(SoundClip::Correct);
    }

    #[test]
    fn test_silent_backend_from_config() {
        let config = AudioConfig {
            enabled: false,
            ..AudioConfig::default()
        };
        let sounds = FeedbackSounds::from_config(&config);
        assert!(sounds.is_loaded(SoundClip::Correct));
        assert!(sounds.is_loaded(SoundClip::Incorrect));
    }

    fn write_clips(dir: &Path) {
        for clip in SoundClip::ALL {
            std::fs::write(dir.join(clip.file_name()), b"ID3").unwrap();
        }
    }

    #[test]
    fn test_bell_backend_rejects_unknown_handle() {
        let dir = tempfile::tempdir().unwrap();
        write_clips(dir.path());

        let mut bell = BellBackend::default();
        let handle = bell
            .load(SoundClip::Correct, &dir.path().join("right.mp3"))
            .unwrap();
        bell.release(handle);
        assert!(matches!(bell.play(handle), Err(AudioError::UnknownHandle)));
    }

    #[test]
    fn test_bell_backend_missing_asset_fails_load() {
        let mut bell = BellBackend::default();
        let result = bell.load(SoundClip::Correct, Path::new("/nonexistent/right.mp3"));
        assert!(matches!(result, Err(AudioError::AssetMissing { clip: SoundClip::Correct, .. })));
    }

    #[test]
    fn test_bell_sounds_without_assets_are_unplayable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wrong.mp3"), b"ID3").unwrap();

        let sounds = FeedbackSounds::load(Box::new(BellBackend::default()), dir.path());
        assert!(!sounds.is_loaded(SoundClip::Correct));
        assert!(sounds.is_loaded(SoundClip::Incorrect));
    }

    #[test]
    fn test_bell_handles_are_not_reused_after_release() {
        let dir = tempfile::tempdir().unwrap();
        write_clips(dir.path());
        let right = dir.path().join("right.mp3");
        let wrong = dir.path().join("wrong.mp3");

        let mut bell = BellBackend::default();
        let first = bell.load(SoundClip::Correct, &right).unwrap();
        let second = bell.load(SoundClip::Incorrect, &wrong).unwrap();
        bell.release(first);
        let third = bell.load(SoundClip::Correct, &right).unwrap();

        assert_ne!(third, first);
        assert_ne!(third, second);
        assert_eq!(bell.clips.len(), 2);
        assert!(bell.clips.contains(&(second, SoundClip::Incorrect)));
        assert!(bell.clips.contains(&(third, SoundClip::Correct)));
    }

    #[test]
    fn test_bundled_assets_load_with_bell() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/audio");
        let sounds = FeedbackSounds::load(Box::new(BellBackend::default()), &assets);
        assert!(sounds.is_loaded(SoundClip::Correct));
        assert!(sounds.is_loaded(SoundClip::Incorrect));
    }

    #[test]
    fn test_read_asset_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("right.mp3");
        let result = read_asset(SoundClip::Correct, &path);
        assert!(matches!(result, Err(AudioError::AssetMissing { clip: SoundClip::Correct, .. })));
    }

    #[test]
    fn test_read_asset_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrong.mp3");
        std::fs::write(&path, b"ID3").unwrap();
        assert_eq!(read_asset(SoundClip::Incorrect, &path).unwrap(), b"ID3".to_vec());
    }
}
