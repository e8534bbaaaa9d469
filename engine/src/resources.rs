//! Reading files and bundled resources.
//!
//! Bundled resources live under a root directory shipped with the game,
//! `res/` next to the executable by default. They are addressed with
//! `/`-separated relative names such as `sprites/player.png`, whatever the
//! platform.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::audio::Sound;
use crate::error::{Error, Result};
use crate::graphics::{Font, Image};

pub const RESOURCE_DIR: &str = "res";

pub fn read_file_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_owned(),
        source,
    })
}

/// Reads a whole file as UTF-8 text.
pub fn read_file_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(String::from_utf8(read_file_bytes(path)?)?)
}

/// Drains `reader`.
pub fn read_all_bytes(mut reader: impl Read) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    root: PathBuf,
}

impl Resources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `res/` beside the executable if it exists, `res/` in the working
    /// directory otherwise.
    pub fn locate() -> Self {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(RESOURCE_DIR)))
            .filter(|dir| dir.is_dir());
        match beside_exe {
            Some(root) => Self::new(root),
            None => Self::new(RESOURCE_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the resource `name`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let invalid = || Error::InvalidResourcePath(name.to_owned());
        if name.is_empty() || name.starts_with('/') || name.contains('\\') {
            return Err(invalid());
        }
        let mut path = self.root.clone();
        for part in name.split('/') {
            if part.is_empty() || part == "." || part == ".." {
                return Err(invalid());
            }
            path.push(part);
        }
        Ok(path)
    }

    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        read_file_bytes(self.resolve(name)?)
    }

    pub fn read_string(&self, name: &str) -> Result<String> {
        read_file_string(self.resolve(name)?)
    }

    pub fn read_image(&self, name: &str) -> Result<Image> {
        Image::from_bytes(&self.read_bytes(name)?)
    }

    pub fn load_sound(&self, name: &str) -> Result<Sound> {
        Sound::from_bytes(self.read_bytes(name)?)
    }

    pub fn load_font(&self, name: &str, size: f32) -> Result<Font> {
        Font::from_bytes(self.read_bytes(name)?, size)
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::locate()
    }
}
