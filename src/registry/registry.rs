use log::{info, warn};

use super::Sprite;
use crate::cli::DuplicatePolicy;
use crate::error::SpriterError;

/// Named sprites in the order they were first added.
///
/// Grows only; there is no removal.
#[derive(Debug, Default, Clone)]
pub struct SpriteRegistry {
    sprites: Vec<Sprite>,
    duplicates: DuplicatePolicy,
}

impl SpriteRegistry {
    pub fn new(duplicates: DuplicatePolicy) -> Self {
        Self {
            sprites: Vec::new(),
            duplicates,
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    /// Store `sprite`. A repeated name keeps its original position and takes
    /// the new values, unless the registry rejects duplicates.
    pub fn insert(&mut self, sprite: Sprite) -> Result<&Sprite, SpriterError> {
        let index = match self.sprites.iter().position(|s| s.name == sprite.name) {
            Some(_) if self.duplicates == DuplicatePolicy::Reject => {
                return Err(SpriterError::DuplicateName(sprite.name));
            }
            Some(i) => {
                warn!("Replacing existing sprite '{}'", sprite.name);
                self.sprites[i] = sprite;
                i
            }
            None => {
                info!(
                    "Added sprite '{}' ({}x{})",
                    sprite.name, sprite.width, sprite.height
                );
                self.sprites.push(sprite);
                self.sprites.len() - 1
            }
        };

        Ok(&self.sprites[index])
    }
}

impl<'a> IntoIterator for &'a SpriteRegistry {
    type Item = &'a Sprite;
    type IntoIter = std::slice::Iter<'a, Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(name: &str, width: u32, height: u32, x: i32, y: i32) -> Sprite {
        Sprite {
            name: name.to_string(),
            width,
            height,
            offset_x: x,
            offset_y: y,
        }
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut registry = SpriteRegistry::default();
        registry.insert(sprite("b", 1, 1, 0, 0)).unwrap();
        registry.insert(sprite("a", 2, 2, 0, 0)).unwrap();

        let names: Vec<_> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn test_second_insert_leaves_first_alone() {
        let mut registry = SpriteRegistry::default();
        registry.insert(sprite("a", 30, 20, 5, 5)).unwrap();
        registry.insert(sprite("b", 10, 10, 1, 1)).unwrap();

        assert_eq!(registry.get("a"), Some(&sprite("a", 30, 20, 5, 5)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = SpriteRegistry::new(DuplicatePolicy::Overwrite);
        registry.insert(sprite("a", 1, 1, 0, 0)).unwrap();
        registry.insert(sprite("b", 1, 1, 0, 0)).unwrap();
        registry.insert(sprite("a", 9, 9, 3, 3)).unwrap();

        assert_eq!(registry.len(), 2);
        let first = registry.iter().next().unwrap();
        assert_eq!(first, &sprite("a", 9, 9, 3, 3));
    }

    #[test]
    fn test_reject_duplicate() {
        let mut registry = SpriteRegistry::new(DuplicatePolicy::Reject);
        registry.insert(sprite("a", 1, 1, 0, 0)).unwrap();

        let err = registry.insert(sprite("a", 9, 9, 3, 3)).unwrap_err();
        assert!(matches!(err, SpriterError::DuplicateName(ref n) if n == "a"));
        assert_eq!(registry.get("a"), Some(&sprite("a", 1, 1, 0, 0)));
    }
}
