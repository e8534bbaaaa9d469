//! Sound playback on the default output device.

mod looping;

use std::fmt;
use std::io::{Cursor, Read};
use std::iter;
use std::path::Path;
use std::sync::{mpsc, Arc};
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use self::looping::Plan;
pub use self::looping::{LoopCount, Looping};
use crate::error::{Error, Result};
use crate::resources::{self, Resources};
use crate::tick;

type Decoded = Buffered<Decoder<Cursor<Vec<u8>>>>;

type Samples = Box<dyn Source<Item = i16> + Send>;

/// A decoded sound, cheap to clone and play many times.
#[derive(Clone)]
pub struct Sound {
    source: Decoded,
}

impl fmt::Debug for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sound")
            .field("sample_rate", &self.sample_rate())
            .field("channels", &self.channels())
            .finish()
    }
}

impl Sound {
    /// Decodes WAV, Ogg Vorbis, FLAC or MP3 data.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let decoder = Decoder::new(Cursor::new(bytes))?;
        Ok(Self {
            source: decoder.buffered(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(resources::read_file_bytes(path)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_bytes(resources::read_all_bytes(reader)?)
    }

    pub fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }

    pub fn channels(&self) -> u16 {
        self.source.channels()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.source.total_duration()
    }
}

/// Owns the output stream, which can't leave the thread that opened it.
struct Keeper {
    stop: Option<mpsc::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for Keeper {
    fn drop(&mut self) {
        // closing the channel wakes the keeper thread
        self.stop.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("audio thread panicked");
            }
        }
    }
}

#[derive(Clone)]
struct Output {
    handle: OutputStreamHandle,
    _keeper: Arc<Keeper>,
}

/// Handle to the audio output. Clones share the same device.
#[derive(Clone, Default)]
pub struct Audio {
    output: Option<Output>,
}

impl fmt::Debug for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Audio {
    /// Opens the default output device.
    pub fn open() -> Result<Self> {
        let (ready_tx, ready_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = tick::spawn("audio", move || match OutputStream::try_default() {
                Ok((stream, handle)) => {
                    if ready_tx.send(Ok(handle)).is_ok() {
                        // returns once every handle is gone
                        let _ = stop_rx.recv();
                    }
                    drop(stream);
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                }
            })?;

        let handle = ready_rx.recv().map_err(|_| Error::AudioUnavailable)??;
        log::info!("audio output opened");
        Ok(Self {
            output: Some(Output {
                handle,
                _keeper: Arc::new(Keeper {
                    stop: Some(stop_tx),
                    thread: Some(thread),
                }),
            }),
        })
    }

    /// Audio that refuses to play anything.
    pub fn disabled() -> Self {
        Self { output: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    /// Starts playing `sound` and returns a handle to control it.
    pub fn play(&self, sound: &Sound, looping: Looping) -> Result<Clip> {
        let output = self.output.as_ref().ok_or(Error::AudioUnavailable)?;
        let sink = Sink::try_new(&output.handle)?;

        sink.append(looped(sound.source.clone(), looping.plan(sound.sample_rate())));

        Ok(Clip {
            sink: Some(sink),
            _output: output.clone(),
        })
    }

    pub fn play_file(&self, path: impl AsRef<Path>, looping: Looping) -> Result<Clip> {
        self.play(&Sound::from_file(path)?, looping)
    }

    pub fn play_bytes(&self, bytes: Vec<u8>, looping: Looping) -> Result<Clip> {
        self.play(&Sound::from_bytes(bytes)?, looping)
    }

    pub fn play_reader(&self, reader: impl Read, looping: Looping) -> Result<Clip> {
        self.play(&Sound::from_reader(reader)?, looping)
    }

    pub fn play_resource(&self, resources: &Resources, name: &str, looping: Looping) -> Result<Clip> {
        self.play(&resources.load_sound(name)?, looping)
    }
}

/// One source for the whole playback. Repeats are produced on demand, so
/// the repeat count costs nothing up front.
fn looped(source: Decoded, plan: Plan) -> Samples {
    let Some(repeats) = plan.repeats else {
        return match plan.segment {
            Some(segment) => Box::new(source.take_duration(segment).repeat_infinite()),
            None => Box::new(source.repeat_infinite()),
        };
    };
    let first = source.clone();
    let segments = iter::repeat_with(move || -> Samples {
        match plan.segment {
            Some(segment) => Box::new(first.clone().take_duration(segment)),
            None => Box::new(first.clone()),
        }
    })
    .take(repeats as usize);
    let whole: Samples = Box::new(source);
    Box::new(rodio::source::from_iter(segments.chain(iter::once(whole))))
}

/// A sound that is playing. Dropping the clip lets it play out.
pub struct Clip {
    sink: Option<Sink>,
    _output: Output,
}

impl Clip {
    pub fn pause(&self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    pub fn resume(&self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    /// Stops playback for good.
    pub fn stop(&self) {
        if let Some(sink) = &self.sink {
            sink.stop();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.sink.as_ref().is_some_and(Sink::is_paused)
    }

    pub fn is_finished(&self) -> bool {
        self.sink.as_ref().map_or(true, Sink::empty)
    }

    /// 1.0 is the sound's own volume.
    pub fn set_volume(&self, volume: f32) {
        if let Some(sink) = &self.sink {
            sink.set_volume(volume.max(0.0));
        }
    }

    pub fn volume(&self) -> f32 {
        self.sink.as_ref().map_or(0.0, Sink::volume)
    }
}

impl Drop for Clip {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.detach();
        }
    }
}

impl fmt::Debug for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clip")
            .field("paused", &self.is_paused())
            .field("finished", &self.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// A mono 16 bit PCM WAV file holding `samples`.
    fn wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVEfmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&sample_rate.to_le_bytes());
        out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes());
        out.extend_from_slice(&16u16.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for s in samples {
            out.extend_from_slice(&s.to_le_bytes());
        }
        out
    }

    #[test]
    fn decodes_wav() {
        let samples: Vec<i16> = (0..800).map(|i| (i * 40) as i16).collect();
        let sound = Sound::from_bytes(wav(8_000, &samples)).unwrap();
        assert_eq!(sound.sample_rate(), 8_000);
        assert_eq!(sound.channels(), 1);
        assert_eq!(sound.source.clone().count(), 800);
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(matches!(
            Sound::from_bytes(b"definitely not audio".to_vec()),
            Err(Error::AudioDecode(_))
        ));
    }

    #[test]
    fn disabled_audio_refuses_to_play() {
        let sound = Sound::from_bytes(wav(8_000, &[0; 16])).unwrap();
        let audio = Audio::disabled();
        assert!(!audio.is_enabled());
        assert!(matches!(
            audio.play(&sound, Looping::forever()),
            Err(Error::AudioUnavailable)
        ));
    }

    fn ramp() -> (Sound, Vec<i16>) {
        let samples: Vec<i16> = (0..8).map(|i| i * 1000).collect();
        (Sound::from_bytes(wav(8_000, &samples)).unwrap(), samples)
    }

    #[test]
    fn once_plays_the_clip_as_is() {
        let (sound, samples) = ramp();
        let out: Vec<i16> = looped(sound.source.clone(), Looping::once().plan(8_000)).collect();
        assert_eq!(out, samples);
    }

    #[test]
    fn repeats_the_segment_then_the_whole_clip() {
        let (sound, samples) = ramp();
        let plan = Looping::times(2).until_frame(4).plan(8_000);
        let out: Vec<i16> = looped(sound.source.clone(), plan).collect();
        assert!(out.len() > 8 && out.len() <= 16, "{} samples", out.len());
        assert_eq!(&out[out.len() - 8..], &samples[..]);
        assert!(out[..out.len() - 8].iter().all(|&s| s < 4000));
    }

    #[test]
    fn huge_repeat_counts_are_queued_lazily() {
        let (sound, _) = ramp();
        let plan = Looping::times(u32::MAX).until_frame(4).plan(8_000);
        let head: Vec<i16> = looped(sound.source.clone(), plan).take(64).collect();
        assert_eq!(head.len(), 64);
        assert!(head.iter().all(|&s| s < 4000));
    }
}
