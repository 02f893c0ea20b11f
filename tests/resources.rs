use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use orrery::engine::resources::{ResourceManager, TextureImage};

struct TempDir(PathBuf);

impl TempDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("orrery-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn checker(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 255, 128])
        }
    })
}

#[test]
fn test_same_path_shares_a_handle() {
    let mut resources = ResourceManager::new("assets");

    let first = resources.load_texture("earth.jpg");
    let again = resources.load_texture("earth.jpg");
    let other = resources.load_texture("mars.jpg");

    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(resources.texture_count(), 2);
    assert_eq!(resources.texture_path(first), PathBuf::from("assets/earth.jpg"));
}

#[test]
fn test_missing_file_resolves_to_fallback() {
    let mut resources = ResourceManager::new("definitely-not-here");
    let handle = resources.load_texture("sun.jpg");

    assert!(!resources.is_resolved(handle));
    let image = resources.resolve(handle).clone();
    assert!(resources.is_resolved(handle));

    assert!(image.fallback);
    assert_eq!((image.width, image.height), (1, 1));
    assert_eq!(image.pixels, TextureImage::FALLBACK_TEXEL.to_vec());
}

#[test]
fn test_png_decodes_to_rgba() {
    // 1. Write a small fixture
    let dir = TempDir::new("decode");
    checker(4, 2).save(dir.0.join("ring.png")).unwrap();

    // 2. Register and decode
    let mut resources = ResourceManager::new(&dir.0);
    let handle = resources.load_texture("ring.png");
    let image = resources.resolve(handle);
    println!("decoded {}x{}", image.width, image.height);

    assert!(!image.fallback);
    assert_eq!((image.width, image.height), (4, 2));
    assert_eq!(image.pixels.len(), 4 * 2 * 4);
    assert_eq!(&image.pixels[0..4], &[255, 0, 0, 255]);
    // Alpha survives for transparent ring textures.
    assert_eq!(&image.pixels[4..8], &[0, 0, 255, 128]);
}

#[test]
fn test_corrupt_file_resolves_to_fallback() {
    let dir = TempDir::new("corrupt");
    std::fs::write(dir.0.join("broken.png"), b"not a png").unwrap();

    let mut resources = ResourceManager::new(&dir.0);
    let handle = resources.load_texture("broken.png");

    assert!(resources.resolve(handle).fallback);
}

#[test]
fn test_cube_faces_are_square_and_uniform() {
    let dir = TempDir::new("cube");
    checker(8, 4).save(dir.0.join("stars.png")).unwrap();

    let mut resources = ResourceManager::new(&dir.0);
    let stars = resources.load_texture("stars.png");
    let missing = resources.load_texture("missing.png");
    let faces = [stars, missing, stars, stars, stars, stars];

    let resolved = resources.resolve_cube(&faces);

    for face in &resolved {
        assert_eq!((face.width, face.height), (8, 8));
        assert_eq!(face.pixels.len(), 8 * 8 * 4);
    }
    assert!(!resolved[0].fallback);
    assert!(resolved[1].fallback);
    assert!(resolved[1]
        .pixels
        .chunks_exact(4)
        .all(|texel| texel
            .iter()
            .zip(TextureImage::FALLBACK_TEXEL)
            .all(|(&got, want)| got.abs_diff(want) <= 1)));
}

#[test]
fn test_resize_keeps_matching_dimensions() {
    let image = TextureImage::from_rgba(checker(3, 3));
    assert_eq!(image.resized(3, 3), image);

    let grown = TextureImage::fallback().resized(2, 4);
    assert_eq!((grown.width, grown.height), (2, 4));
    assert!(grown.fallback);
}
