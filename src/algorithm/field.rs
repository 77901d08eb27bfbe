use crate::{pos::Pos, source::Source};

/// Squared distances below this are clamped so a point sitting on a source
/// still gets a finite contribution.
pub const MIN_DISTANCE_SQUARED: f64 = 1e-6;

/// Inverse-square falloff field: every source adds `r² / d²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    falloff_radius2: f64,
}

impl Field {
    pub fn new(falloff_radius: f64) -> Self {
        Self {
            falloff_radius2: falloff_radius * falloff_radius,
        }
    }

    pub fn contribution(&self, point: Pos, sources: &[Source]) -> f64 {
        sources
            .iter()
            .map(|s| {
                self.falloff_radius2
                    / point.dist2(s.pos).max(MIN_DISTANCE_SQUARED)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn no_sources_is_zero() {
        assert_eq!(Field::new(60.).contribution(Pos::new(1., 1.), &[]), 0.);
    }

    #[test]
    fn single_source_is_inverse_square() {
        let field = Field::new(60.);
        let sources = [Source::stationary(Pos::new(100., 100.), 30.)];

        // r² / d² = 3600 / 900
        let v = field.contribution(Pos::new(130., 100.), &sources);
        assert_relative_eq!(v, 4.);

        // exactly the falloff radius away is the threshold 1.0
        let v = field.contribution(Pos::new(100., 160.), &sources);
        assert_relative_eq!(v, 1.);
    }

    #[test]
    fn contributions_add_up() {
        let field = Field::new(10.);
        let sources = [
            Source::stationary(Pos::new(0., 0.), 1.),
            Source::stationary(Pos::new(20., 0.), 1.),
        ];
        let v = field.contribution(Pos::new(10., 0.), &sources);
        assert_relative_eq!(v, 2.);
    }

    #[test]
    fn order_of_sources_does_not_matter() {
        let field = Field::new(60.);
        let mut sources = vec![
            Source::stationary(Pos::new(12.5, 800.), 30.),
            Source::stationary(Pos::new(333., 41.25), 30.),
            Source::stationary(Pos::new(900., 900.), 30.),
            Source::stationary(Pos::new(450., 451.), 30.),
        ];
        let p = Pos::new(400., 420.);

        let forward = field.contribution(p, &sources);
        sources.reverse();
        let backward = field.contribution(p, &sources);
        sources.swap(0, 2);
        let shuffled = field.contribution(p, &sources);

        assert_relative_eq!(forward, backward, max_relative = 1e-12);
        assert_relative_eq!(forward, shuffled, max_relative = 1e-12);
    }

    #[test]
    fn point_on_a_source_is_finite() {
        let field = Field::new(60.);
        let sources = [Source::stationary(Pos::new(200., 200.), 30.)];
        let v = field.contribution(Pos::new(200., 200.), &sources);
        assert!(v.is_finite());
        assert_relative_eq!(v, 3600. / MIN_DISTANCE_SQUARED);
    }
}
