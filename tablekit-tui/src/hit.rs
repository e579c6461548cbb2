//! Clickable screen regions recorded while rendering.

use crate::screen::Rect;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Column header, by column key.
    Header(String),
    PrevPage,
    NextPage,
}

/// Clickable regions of the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, target: Target) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, target));
        }
    }

    /// The target at `(x, y)`. Later regions are on top.
    pub fn target_at(&self, x: u16, y: u16) -> Option<&Target> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| target)
    }

    pub fn rect_of(&self, target: &Target) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| t == target)
            .map(|(rect, _)| *rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_at() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 2, 5, 1), Target::Header("id".into()));
        hits.push(Rect::new(6, 2, 8, 1), Target::Header("name".into()));

        assert_eq!(hits.target_at(3, 2), Some(&Target::Header("id".into())));
        assert_eq!(hits.target_at(6, 2), Some(&Target::Header("name".into())));
        assert_eq!(hits.target_at(5, 2), None);
        assert_eq!(hits.target_at(3, 3), None);
    }

    #[test]
    fn test_later_regions_win() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 10, 10), Target::PrevPage);
        hits.push(Rect::new(2, 2, 2, 2), Target::NextPage);
        assert_eq!(hits.target_at(3, 3), Some(&Target::NextPage));
        assert_eq!(hits.target_at(0, 0), Some(&Target::PrevPage));
    }

    #[test]
    fn test_empty_regions_are_dropped() {
        let mut hits = HitMap::new();
        hits.push(Rect::new(0, 0, 0, 1), Target::PrevPage);
        assert_eq!(hits.rect_of(&Target::PrevPage), None);
    }
}
