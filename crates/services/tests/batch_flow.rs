use drill_core::model::{OperatorSet, PracticeDefaults, ProblemSettings};
use drill_core::TICK_MS;
use services::{AnswerOutcome, BatchPhase, GridValidator, ProblemEngine};

fn defaults(ops: &str, seed: u64) -> PracticeDefaults {
    PracticeDefaults {
        problems: ProblemSettings::new(6, 1, 13, OperatorSet::parse(ops).unwrap()).unwrap(),
        seed: Some(seed),
        ..PracticeDefaults::default()
    }
}

#[test]
fn batch_solved_in_order_completes_and_freezes() {
    let mut engine = ProblemEngine::from_defaults(&defaults("+-*/", 9));
    engine.generate().unwrap();

    let mut cursor = Some(0);
    while let Some(index) = cursor {
        engine.tick();
        engine.tick();
        let answer = engine.problems()[index].answer_label();
        match engine.submit_input(index, &answer).unwrap() {
            AnswerOutcome::Correct { next, .. } => cursor = next,
            other => panic!("problem {index} ({answer}) not accepted: {other:?}"),
        }
    }

    assert_eq!(engine.phase(), BatchPhase::Completed);
    let elapsed = engine.elapsed_ms();
    assert_eq!(elapsed, 12 * TICK_MS);
    for _ in 0..50 {
        engine.tick();
    }
    assert_eq!(engine.elapsed_ms(), elapsed);

    let progress = engine.progress();
    assert_eq!((progress.total, progress.solved, progress.remaining), (6, 6, 0));
}

#[test]
fn seeded_engines_agree() {
    let mut a = ProblemEngine::from_defaults(&defaults("*", 1234));
    let mut b = ProblemEngine::from_defaults(&defaults("*", 1234));
    let first = a.generate().unwrap().to_vec();
    assert_eq!(first.as_slice(), b.generate().unwrap());
}

#[test]
fn grid_and_engine_are_independent() {
    let mut grid = GridValidator::new(PracticeDefaults::default().grid);
    let mut engine = ProblemEngine::from_defaults(&defaults("+", 3));
    engine.generate().unwrap();

    assert!(grid.set_range(5, 3).is_err());
    assert_eq!(grid.cells().count(), 10);
    assert_eq!(engine.phase(), BatchPhase::Running);
}
