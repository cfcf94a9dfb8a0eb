/// Sprite component: the visual bookkeeping physics touches.
/// Loading and drawing the resource belong to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    /// Resource name the renderer looks the image up by.
    pub resource: String,
    /// Whether the image is mirrored horizontally.
    pub flip_x: bool,
}

impl SpriteComponent {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            flip_x: false,
        }
    }

    /// Mirror the image horizontally.
    pub fn mirror(&mut self) {
        self.flip_x = !self.flip_x;
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self::new("")
    }
}
