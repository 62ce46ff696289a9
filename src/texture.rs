use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::RasterCanvas;

/// GPU copy of the raster canvas.
///
/// Holds a single texture and re-uploads it only when the canvas revision
/// moved since the last upload.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    uploaded_revision: Option<u64>,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next [`Self::texture_id`] call will upload pixels
    pub fn is_stale(&self, canvas: &RasterCanvas) -> bool {
        self.handle.is_none() || self.uploaded_revision != Some(canvas.revision())
    }

    pub fn texture_id(&mut self, ctx: &Context, canvas: &RasterCanvas) -> TextureId {
        let stale = self.is_stale(canvas);
        if stale {
            let image = to_color_image(canvas);
            match &mut self.handle {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    self.handle = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
                }
            }
            self.uploaded_revision = Some(canvas.revision());
            log::trace!("Uploaded canvas revision {}", canvas.revision());
        }

        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }
}

fn to_color_image(canvas: &RasterCanvas) -> ColorImage {
    let image = canvas.image();
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}
