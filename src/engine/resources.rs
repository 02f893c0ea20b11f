use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Opaque reference to a registered texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureHandle(usize);

impl TextureHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Decoded RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// Set when decoding failed and a placeholder was substituted.
    pub fallback: bool,
}

impl TextureImage {
    pub const FALLBACK_TEXEL: [u8; 4] = [160, 160, 160, 255];

    pub fn fallback() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: Self::FALLBACK_TEXEL.to_vec(),
            fallback: true,
        }
    }

    pub fn from_rgba(image: image::RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            pixels: image.into_raw(),
            fallback: false,
        }
    }

    pub fn resized(&self, width: u32, height: u32) -> Self {
        if self.width == width && self.height == height {
            return self.clone();
        }
        let resized = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .map(|source| {
                image::imageops::resize(&source, width, height, image::imageops::FilterType::Triangle)
            })
            .unwrap_or_else(|| {
                image::RgbaImage::from_pixel(width, height, image::Rgba(Self::FALLBACK_TEXEL))
            });
        Self {
            fallback: self.fallback,
            ..Self::from_rgba(resized)
        }
    }
}

#[derive(Debug)]
struct TextureEntry {
    path: PathBuf,
    image: Option<TextureImage>,
}

/// Texture registry. Registration is cheap and idempotent per path; decoding
/// happens on first [`ResourceManager::resolve`].
#[derive(Default, Debug)]
pub struct ResourceManager {
    root: PathBuf,
    textures: Vec<TextureEntry>,
    by_path: HashMap<PathBuf, TextureHandle>,
}

impl ResourceManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_texture(&mut self, path: impl AsRef<Path>) -> TextureHandle {
        let path = self.root.join(path);
        if let Some(handle) = self.by_path.get(&path) {
            return *handle;
        }
        tracing::debug!(target: "resources", path = %path.display(), "registering texture");
        let handle = TextureHandle(self.textures.len());
        self.textures.push(TextureEntry {
            path: path.clone(),
            image: None,
        });
        self.by_path.insert(path, handle);
        handle
    }

    pub fn texture_path(&self, handle: TextureHandle) -> &Path {
        &self.textures[handle.0].path
    }

    pub fn is_resolved(&self, handle: TextureHandle) -> bool {
        self.textures[handle.0].image.is_some()
    }

    /// Decodes the texture if needed. A missing or corrupt file yields the
    /// fallback texel instead of an error.
    pub fn resolve(&mut self, handle: TextureHandle) -> &TextureImage {
        let entry = &mut self.textures[handle.0];
        entry.image.get_or_insert_with(|| match decode(&entry.path) {
            Ok(image) => {
                tracing::debug!(
                    target: "resources",
                    path = %entry.path.display(),
                    width = image.width,
                    height = image.height,
                    "texture decoded"
                );
                image
            }
            Err(err) => {
                tracing::warn!(
                    target: "resources",
                    path = %entry.path.display(),
                    error = %format!("{err:#}"),
                    "texture unavailable, using fallback"
                );
                TextureImage::fallback()
            }
        })
    }

    /// Resolves six cube faces, resampling each to a square whose side is the
    /// first face's larger dimension.
    pub fn resolve_cube(&mut self, faces: &[TextureHandle; 6]) -> [TextureImage; 6] {
        let first = self.resolve(faces[0]);
        let side = first.width.max(first.height);
        faces.map(|face| self.resolve(face).resized(side, side))
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

fn decode(path: &Path) -> Result<TextureImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to decode texture {}", path.display()))?;
    Ok(TextureImage::from_rgba(image.to_rgba8()))
}
