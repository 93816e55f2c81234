use rand::Rng;

use drill_core::model::{Operator, Problem, ProblemSettings};

use crate::error::GenerateError;

/// Draws a batch of `settings.count()` problems.
///
/// Operands come uniformly from `[min, max)`. Divisors skip zero; when the
/// range holds no other value, division is left out of the draw.
pub(crate) fn draw_batch<R: Rng + ?Sized>(
    rng: &mut R,
    settings: &ProblemSettings,
) -> Result<Vec<Problem>, GenerateError> {
    let (min, max) = (settings.min(), settings.max());
    let has_divisor = !(min == 0 && max == 1);

    let operators = settings
        .operators()
        .to_vec()
        .into_iter()
        .filter(|op| has_divisor || *op != Operator::Divide)
        .collect::<Vec<_>>();
    if operators.is_empty() {
        return Err(GenerateError::NoDivisor);
    }

    let count = usize::try_from(settings.count()).unwrap_or(usize::MAX);
    let mut problems = Vec::with_capacity(count);
    for _ in 0..count {
        let operator = operators[rng.random_range(0..operators.len())];
        let left = rng.random_range(min..max);
        let right = if operator == Operator::Divide {
            draw_divisor(rng, min, max)
        } else {
            rng.random_range(min..max)
        };
        problems.push(Problem::new(left, right, operator));
    }
    Ok(problems)
}

/// Uniform over `[min, max) \ {0}`. Callers guarantee the set is non-empty.
fn draw_divisor<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min > 0 || max <= 0 {
        return rng.random_range(min..max);
    }
    let value = rng.random_range(min..max - 1);
    if value >= 0 { value + 1 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::model::OperatorSet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(count: u32, min: i64, max: i64, ops: &str) -> ProblemSettings {
        ProblemSettings::new(count, min, max, OperatorSet::parse(ops).unwrap()).unwrap()
    }

    #[test]
    fn operands_stay_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let batch = draw_batch(&mut rng, &settings(200, -3, 4, "+-*")).unwrap();
        assert_eq!(batch.len(), 200);
        for problem in &batch {
            assert!((-3..4).contains(&problem.left()));
            assert!((-3..4).contains(&problem.right()));
        }
    }

    #[test]
    fn divisors_are_never_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        let batch = draw_batch(&mut rng, &settings(500, -2, 3, "/")).unwrap();
        assert!(batch.iter().all(|p| p.right() != 0 && p.is_solvable()));
        assert!(batch.iter().any(|p| p.right() == -2));
        assert!(batch.iter().any(|p| p.right() == 2));
    }

    #[test]
    fn zero_only_range_drops_division() {
        let mut rng = StdRng::seed_from_u64(3);
        let batch = draw_batch(&mut rng, &settings(20, 0, 1, "+/")).unwrap();
        assert!(batch.iter().all(|p| p.operator() == Operator::Add));

        let err = draw_batch(&mut rng, &settings(20, 0, 1, "/")).unwrap_err();
        assert_eq!(err, GenerateError::NoDivisor);
    }

    #[test]
    fn every_allowed_operator_gets_drawn() {
        let mut rng = StdRng::seed_from_u64(5);
        let batch = draw_batch(&mut rng, &settings(200, 1, 10, "+-*/")).unwrap();
        for op in Operator::ALL {
            assert!(batch.iter().any(|p| p.operator() == op), "{op:?}");
        }
    }
}
