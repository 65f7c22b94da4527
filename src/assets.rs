/// Page asset loading
///
/// This module resolves the catalog's opaque asset references against the
/// `assets/` directory, decodes the bitmaps off the UI thread and derives
/// drawer thumbnails by downscaling whenever no pre-rendered `thumb-*` file
/// is present.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::state::catalog::Page;

/// Size of derived thumbnails (square bounding box)
const THUMBNAIL_SIZE: u32 = 256;

/// Extensions probed when resolving an asset reference to a file
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Directory holding the page bitmaps
const ASSETS_DIR: &str = "assets";

/// A decoded bitmap ready for rendering
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    /// Pixel handle consumed by the renderer
    pub handle: Handle,
    /// Native bitmap width, for aspect-fit layout
    pub width: u32,
    /// Native bitmap height, for aspect-fit layout
    pub height: u32,
}

/// All decoded assets, keyed by asset reference
#[derive(Debug, Clone, Default)]
pub struct AssetStore {
    assets: HashMap<String, LoadedAsset>,
}

impl AssetStore {
    /// Look up a decoded asset by reference
    pub fn get(&self, reference: &str) -> Option<&LoadedAsset> {
        self.assets.get(reference)
    }

    fn insert(&mut self, reference: String, asset: LoadedAsset) {
        self.assets.insert(reference, asset);
    }

    /// Number of decoded assets (full pages and thumbnails)
    pub fn len(&self) -> usize {
        self.assets.len()
    }
}

/// Outcome of the startup asset load
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub store: AssetStore,
    /// References that could not be resolved or decoded
    pub missing: Vec<String>,
}

/// Decode every page image and thumbnail in the catalog
///
/// Decoding is CPU-bound, so it runs on a blocking task and reports back
/// through a single completion message.
pub async fn load_assets(pages: Vec<Page>) -> LoadResult {
    tokio::task::spawn_blocking(move || load_assets_blocking(&pages))
        .await
        .unwrap_or_else(|e| {
            eprintln!("⚠️  Asset loading task failed: {}", e);
            LoadResult {
                store: AssetStore::default(),
                missing: Vec::new(),
            }
        })
}

/// Blocking implementation of the asset load
fn load_assets_blocking(pages: &[Page]) -> LoadResult {
    let mut store = AssetStore::default();
    let mut missing = Vec::new();

    for page in pages {
        let Some(decoded) = decode_image(&page.image_asset) else {
            missing.push(page.image_asset.clone());
            continue;
        };

        // Prefer a pre-rendered thumbnail file, derive one otherwise
        let thumb_reference = page.thumbnail_asset();
        let thumbnail = decode_image(&thumb_reference).unwrap_or_else(|| {
            decoded.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        });

        store.insert(page.image_asset.clone(), to_loaded(&decoded));
        store.insert(thumb_reference, to_loaded(&thumbnail));
    }

    println!(
        "🖼️  Decoded {} assets ({} missing)",
        store.len(),
        missing.len()
    );

    LoadResult { store, missing }
}

/// Resolve an asset reference to a file by probing the known extensions
fn resolve_asset(reference: &str) -> Option<PathBuf> {
    let dir = Path::new(ASSETS_DIR);

    IMAGE_EXTENSIONS
        .iter()
        .map(|extension| dir.join(format!("{}.{}", reference, extension)))
        .find(|path| path.exists())
}

/// Decode the bitmap behind an asset reference
///
/// Failures are logged and reported as `None`; a missing or corrupt asset
/// must never take the viewer down.
fn decode_image(reference: &str) -> Option<image::DynamicImage> {
    let path = resolve_asset(reference)?;

    match image::open(&path) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            eprintln!("⚠️  Failed to decode {}: {}", path.display(), e);
            None
        }
    }
}

/// Convert a decoded image into a renderer handle plus its dimensions
fn to_loaded(decoded: &image::DynamicImage) -> LoadedAsset {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    LoadedAsset {
        handle: Handle::from_rgba(width, height, rgba.into_raw()),
        width,
        height,
    }
}
