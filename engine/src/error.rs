use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read stream")]
    Stream(#[from] std::io::Error),

    #[error("invalid resource path `{0}`")]
    InvalidResourcePath(String),

    #[error("contents are not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to decode image")]
    Image(#[from] image::ImageError),

    #[error("invalid image dimensions {width}x{height} for {len} bytes")]
    ImageSize { width: u32, height: u32, len: usize },

    #[error("can't create a {width}x{height} canvas")]
    CanvasSize { width: u32, height: u32 },

    #[error("invalid hex color `{0}`")]
    InvalidColor(String),

    #[error("invalid font data")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("failed to decode audio")]
    AudioDecode(#[from] rodio::decoder::DecoderError),

    #[error("failed to open audio output")]
    AudioStream(#[from] rodio::StreamError),

    #[error("failed to start playback")]
    AudioPlay(#[from] rodio::PlayError),

    #[error("no audio output device available")]
    AudioUnavailable,

    #[error("window system error")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("invalid window icon")]
    Icon(#[from] winit::window::BadIcon),

    #[error("graphics setup failed: {0}")]
    Graphics(String),

    #[error("failed to spawn thread")]
    Thread(#[source] std::io::Error),
}
