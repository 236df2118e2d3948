use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::coords::Vec2;
use crate::item::ItemKind;

/// Alpha values at or above this count as drawn pixels for hit-testing,
/// the same cutoff the classic toolkit transparency query applies.
pub const ALPHA_THRESHOLD: u8 = 128;

/// File name of the scene background in an asset directory.
pub const BACKGROUND_FILE: &str = "background1.png";

// ── Sprite ────────────────────────────────────────────────────────────────

/// An immutable RGBA image.
///
/// Loaded once per item kind and shared by reference; the mirror state of an
/// item is a draw-time flag, never a second pixel buffer. Hit-testing reads
/// the alpha channel of this source image directly.
pub struct Sprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Sprite {
    /// Wraps a raw RGBA buffer. `rgba` must hold `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self { width, height, rgba }
    }

    /// Builds a white sprite from an alpha mask, one byte per pixel.
    /// Intended for tests that need a known transparency layout.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Self {
        debug_assert_eq!(alpha.len(), width as usize * height as usize);
        let mut rgba = Vec::with_capacity(alpha.len() * 4);
        for &a in alpha {
            rgba.extend_from_slice(&[0xff, 0xff, 0xff, a]);
        }
        Self::from_rgba(width, height, rgba)
    }

    /// Builds a fully opaque white sprite.
    pub fn solid(width: u32, height: u32) -> Self {
        let alpha = vec![0xff; (width * height) as usize];
        Self::from_alpha(width, height, &alpha)
    }

    /// Decodes an image file into a sprite.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|source| SpriteError { path: path.to_path_buf(), source })?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self::from_rgba(width, height, decoded.into_raw()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sprite extent as a vector, for center/half-extent arithmetic.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f64, self.height as f64)
    }

    /// Raw RGBA pixels, row-major, for the presenting shell to blit.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Whether the pixel at `(x, y)` is drawn (alpha at or above the
    /// threshold). Out-of-range coordinates are not drawn.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4 + 3;
        self.rgba[idx] >= ALPHA_THRESHOLD
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// ── SpriteError ───────────────────────────────────────────────────────────

/// Failure to read or decode a sprite image.
#[derive(Debug)]
pub struct SpriteError {
    pub path: PathBuf,
    pub source: image::ImageError,
}

impl fmt::Display for SpriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load sprite {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for SpriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// ── SpriteBank ────────────────────────────────────────────────────────────

/// Per-kind sprite table consulted when the scene constructs items.
///
/// The presenting application fills it from an asset directory with
/// [`load_dir`](SpriteBank::load_dir); tests fill it with synthetic sprites.
#[derive(Debug, Default)]
pub struct SpriteBank {
    sprites: HashMap<ItemKind, Arc<Sprite>>,
}

impl SpriteBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: ItemKind, sprite: Arc<Sprite>) {
        self.sprites.insert(kind, sprite);
    }

    /// Returns a shared handle to the sprite for `kind`, if registered.
    pub fn get(&self, kind: ItemKind) -> Option<Arc<Sprite>> {
        self.sprites.get(&kind).map(Arc::clone)
    }

    /// Loads every item kind's image from `dir` using the kind's file name.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, SpriteError> {
        let dir = dir.as_ref();
        let mut bank = Self::new();
        for kind in ItemKind::ALL {
            let sprite = Sprite::load(dir.join(kind.sprite_file()))?;
            bank.insert(kind, Arc::new(sprite));
        }
        Ok(bank)
    }
}
