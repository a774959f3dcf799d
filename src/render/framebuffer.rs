use raylib::core::texture::RaylibTexture2D; // trait import for .update_texture()
use raylib::prelude::*;

/// CPU-side pixel buffer the renderers draw into. Uploaded to a persistent
/// texture once per frame.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    #[inline] pub fn set_current_color(&mut self, c: Color) { self.current_color = c; }
    #[inline] pub fn set_background_color(&mut self, c: Color) { self.background_color = c; }

    /// Fills an axis-aligned rectangle with the current color, clipped to
    /// the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for yy in y0..y1 {
            let row = yy as u32 * self.width;
            for xx in x0..x1 {
                self.color_buffer[(row + xx as u32) as usize] = self.current_color;
            }
        }
    }

    /// Uploads the pixels to a persistent texture.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // Reinterpret &[Color] as RGBA8 bytes without copying.
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}
