use std::fmt;

/// Identifier the game assigns to a live unit (monster, npc or player).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// World position in game tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, the number of tiles a unit walks when diagonal
    /// steps are allowed.
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Valid engagement range for a technique: the agent keeps at least `min` and
/// at most `max` tiles between itself and the target while casting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "EnvelopeBounds"))]
pub struct DistanceEnvelope {
    pub min: u32,
    pub max: u32,
}

impl DistanceEnvelope {
    /// Builds an envelope, swapping the bounds if they were given in reverse.
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub const fn contains(&self, distance: u32) -> bool {
        distance >= self.min && distance <= self.max
    }
}

/// Bounds as written in data files, before normalization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EnvelopeBounds {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl From<EnvelopeBounds> for DistanceEnvelope {
    fn from(bounds: EnvelopeBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

impl fmt::Display for DistanceEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_distance_uses_longest_axis() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -7);
        assert_eq!(a.chebyshev_distance(b), 7);
        assert_eq!(b.chebyshev_distance(a), 7);
    }

    #[test]
    fn chebyshev_distance_spans_the_whole_coordinate_range() {
        let low = Position::new(i32::MIN, 0);
        let high = Position::new(i32::MAX, 1);
        assert_eq!(low.chebyshev_distance(high), u32::MAX);
    }

    #[test]
    fn envelope_normalizes_reversed_bounds() {
        let envelope = DistanceEnvelope::new(30, 25);
        assert_eq!(envelope, DistanceEnvelope { min: 25, max: 30 });
        assert!(envelope.contains(25));
        assert!(envelope.contains(30));
        assert!(!envelope.contains(31));
    }
}
