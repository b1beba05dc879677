// Circular image carousel for the property detail sheet.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryStep {
    Previous,
    Next,
}

/// Images of the open listing plus a cursor that is always in range when
/// there is at least one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    /// Load a new image list and rewind to the first image.
    pub fn set_images(&mut self, images: Vec<String>) {
        self.images = images;
        self.index = 0;
    }

    pub fn clear(&mut self) {
        self.set_images(Vec::new());
    }

    /// Move one image, wrapping at both ends. No-op when empty.
    pub fn step(&mut self, step: GalleryStep) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = match step {
            GalleryStep::Next => (self.index + 1) % len,
            GalleryStep::Previous => (self.index + len - 1) % len,
        };
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// 1-based `(position, total)`, or `None` without images.
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.images.is_empty()).then(|| (self.index + 1, self.images.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery(n: usize) -> Gallery {
        let mut g = Gallery::default();
        g.set_images((0..n).map(|i| format!("img{i}.jpg")).collect());
        g
    }

    #[test]
    fn empty_gallery_ignores_steps() {
        let mut g = gallery(0);
        g.step(GalleryStep::Next);
        g.step(GalleryStep::Previous);
        assert_eq!(g.index(), 0);
        assert_eq!(g.position(), None);
        assert_eq!(g.current(), None);
    }

    #[test]
    fn n_steps_forward_is_identity() {
        for n in 1..=5 {
            let mut g = gallery(n);
            g.step(GalleryStep::Next);
            let start = g.index();
            for _ in 0..n {
                g.step(GalleryStep::Next);
            }
            assert_eq!(g.index(), start);
        }
    }

    #[test]
    fn back_then_forward_is_identity() {
        let mut g = gallery(3);
        g.step(GalleryStep::Previous);
        assert_eq!(g.position(), Some((3, 3)));
        g.step(GalleryStep::Next);
        assert_eq!(g.position(), Some((1, 3)));
    }

    #[test]
    fn set_images_rewinds() {
        let mut g = gallery(4);
        g.step(GalleryStep::Next);
        g.step(GalleryStep::Next);
        g.set_images(vec!["a.jpg".into()]);
        assert_eq!(g.current(), Some("a.jpg"));
        assert_eq!(g.position(), Some((1, 1)));
    }
}
