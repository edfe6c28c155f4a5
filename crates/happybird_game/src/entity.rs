use crate::bird::Bird;
use crate::frame::Frame;
use crate::mask::Mask;
use crate::obstacle::{Drifter, Log};
use crate::rect::Rect;
use crate::scroller::ScrollingPair;

/// Collision-relevant kind of an entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpriteType {
    Ground,
    Bird,
    Pig,
    Enemy,
    Log,
}

impl SpriteType {
    /// Touching these ends the flight.
    pub fn is_lethal(self) -> bool {
        matches!(self, SpriteType::Ground | SpriteType::Log | SpriteType::Enemy)
    }

    /// Spawned during a flight and cleared when it ends.
    pub fn is_obstacle(self) -> bool {
        matches!(self, SpriteType::Pig | SpriteType::Enemy | SpriteType::Log)
    }
}

#[derive(Clone, Debug)]
pub enum Entity {
    Background(ScrollingPair),
    Ground(ScrollingPair),
    Bird(Bird),
    Pig(Drifter),
    Enemy(Drifter),
    Log(Log),
}

impl Entity {
    pub fn sprite_type(&self) -> Option<SpriteType> {
        match self {
            Entity::Background(_) => None,
            Entity::Ground(_) => Some(SpriteType::Ground),
            Entity::Bird(_) => Some(SpriteType::Bird),
            Entity::Pig(_) => Some(SpriteType::Pig),
            Entity::Enemy(_) => Some(SpriteType::Enemy),
            Entity::Log(_) => Some(SpriteType::Log),
        }
    }

    pub fn is_obstacle(&self) -> bool {
        self.sprite_type().is_some_and(SpriteType::is_obstacle)
    }

    pub fn as_bird(&self) -> Option<&Bird> {
        match self {
            Entity::Bird(bird) => Some(bird),
            _ => None,
        }
    }

    pub fn as_bird_mut(&mut self) -> Option<&mut Bird> {
        match self {
            Entity::Bird(bird) => Some(bird),
            _ => None,
        }
    }

    /// Advance one frame. Returns false once the entity has left the
    /// screen and should be culled.
    pub fn update(&mut self, dt: f32, clock_ms: f64) -> bool {
        match self {
            Entity::Background(pair) | Entity::Ground(pair) => {
                pair.update(dt);
                true
            }
            Entity::Bird(bird) => {
                bird.update(dt);
                true
            }
            Entity::Pig(drifter) | Entity::Enemy(drifter) => {
                drifter.update(dt, clock_ms);
                !drifter.is_off_screen()
            }
            Entity::Log(log) => {
                log.update(dt);
                !log.is_off_screen()
            }
        }
    }

    /// Pixel-accurate overlap with `mask` placed at `rect`.
    pub fn overlaps(&self, rect: Rect, mask: &Mask) -> bool {
        let hit = |other_rect: Rect, other_mask: &Mask| {
            mask.overlaps(other_mask, other_rect.x - rect.x, other_rect.y - rect.y)
        };
        match self {
            Entity::Background(_) => false,
            Entity::Ground(pair) => pair.rects().into_iter().any(|r| hit(r, pair.mask())),
            Entity::Bird(bird) => hit(bird.rect(), bird.mask()),
            Entity::Pig(drifter) | Entity::Enemy(drifter) => hit(drifter.rect(), drifter.mask()),
            Entity::Log(log) => hit(log.rect(), log.mask()),
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self {
            Entity::Background(pair) | Entity::Ground(pair) => pair.draw(frame),
            Entity::Bird(bird) => {
                let rect = bird.rect();
                frame.blit(bird.image(), rect.x, rect.y);
            }
            Entity::Pig(drifter) | Entity::Enemy(drifter) => {
                let rect = drifter.rect();
                frame.blit(drifter.image(), rect.x, rect.y);
            }
            Entity::Log(log) => {
                let rect = log.rect();
                frame.blit(log.image(), rect.x, rect.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lethal_and_obstacle_kinds() {
        use SpriteType::*;
        assert!(Ground.is_lethal() && Log.is_lethal() && Enemy.is_lethal());
        assert!(!Pig.is_lethal() && !Bird.is_lethal());
        assert!(Pig.is_obstacle() && Enemy.is_obstacle() && Log.is_obstacle());
        assert!(!Ground.is_obstacle() && !Bird.is_obstacle());
    }
}
