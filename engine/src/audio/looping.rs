use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
    /// Play through once.
    #[default]
    Once,
    /// Repeat the loop segment this many extra times.
    Times(u32),
    /// Repeat the loop segment until stopped.
    Forever,
}

/// How a clip loops.
///
/// The loop segment runs from the start of the clip up to `end`, counted in
/// sample frames (the whole clip when `None`). A clip played with
/// `Times(n)` plays the segment `n` times and then the whole clip once more;
/// `Forever` never gets past the segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Looping {
    pub count: LoopCount,
    pub end: Option<u64>,
}

impl Looping {
    pub fn once() -> Self {
        Default::default()
    }

    pub fn times(count: u32) -> Self {
        Self {
            count: LoopCount::Times(count),
            end: None,
        }
    }

    pub fn forever() -> Self {
        Self {
            count: LoopCount::Forever,
            end: None,
        }
    }

    /// Ends the loop segment at sample frame `end`.
    pub fn until_frame(mut self, end: u64) -> Self {
        self.end = Some(end);
        self
    }

    pub(crate) fn plan(&self, sample_rate: u32) -> Plan {
        let segment = self.end.map(|end| frames_to_duration(end, sample_rate));
        let repeats = match self.count {
            LoopCount::Once => Some(0),
            LoopCount::Times(n) => Some(n),
            LoopCount::Forever => None,
        };
        Plan { segment, repeats }
    }
}

/// What to queue for one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Plan {
    /// Length of the loop segment, `None` for the whole clip.
    pub segment: Option<Duration>,
    /// Segment plays before the final full pass, `None` to loop forever.
    pub repeats: Option<u32>,
}

pub(crate) fn frames_to_duration(frames: u64, sample_rate: u32) -> Duration {
    let rate = sample_rate.max(1) as u64;
    let secs = frames / rate;
    let nanos = (frames % rate) * 1_000_000_000 / rate;
    Duration::from_secs(secs) + Duration::from_nanos(nanos)
}
