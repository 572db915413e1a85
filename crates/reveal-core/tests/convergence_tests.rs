// Host-side tests for the per-frame convergence loop.

use reveal_core::constants::SETTLE_TOLERANCE;
use reveal_core::*;

#[derive(Default)]
struct Recorder {
    writes: Vec<ParameterSet>,
}

impl OutputSink for Recorder {
    fn apply(&mut self, values: &ParameterSet) -> anyhow::Result<()> {
        self.writes.push(*values);
        Ok(())
    }
}

fn run_until_settled(
    engine: &mut ConvergenceEngine,
    target: &ParameterSet,
    sink: &mut Recorder,
    max_ticks: usize,
) -> usize {
    engine.request();
    for n in 1..=max_ticks {
        if engine.tick(target, sink).unwrap() == Tick::Settled {
            return n;
        }
    }
    panic!("did not settle within {max_ticks} ticks");
}

#[test]
fn distance_shrinks_every_tick_without_overshoot() {
    let schedule = TimelineSchedule::default();
    let target = schedule.evaluate(1.0);
    let mut engine = ConvergenceEngine::with_defaults(schedule.initial());
    let mut sink = Recorder::default();
    engine.request();

    let mut prev = *engine.current();
    loop {
        let tick = engine.tick(&target, &mut sink).unwrap();
        if tick == Tick::Settled {
            break;
        }
        let now = *engine.current();
        for field in Field::ALL {
            let before = prev.get(field) - target.get(field);
            let after = now.get(field) - target.get(field);
            if before.abs() > SETTLE_TOLERANCE {
                assert!(
                    after.abs() < before.abs(),
                    "{field:?} did not approach target: {before} -> {after}"
                );
            }
            assert!(
                before == 0.0 || after == 0.0 || before.signum() == after.signum(),
                "{field:?} crossed its target: {before} -> {after}"
            );
        }
        prev = now;
    }
    assert_eq!(*engine.current(), target);
}

#[test]
fn full_reveal_settles_in_bounded_ticks() {
    let schedule = TimelineSchedule::default();
    let mut engine = ConvergenceEngine::with_defaults(schedule.initial());
    let mut sink = Recorder::default();
    let ticks = run_until_settled(&mut engine, &schedule.evaluate(1.0), &mut sink, 200);
    // img2 travels 100% at 12% per tick: 0.88^n * 100 <= 0.01
    assert!((60..=80).contains(&ticks), "settled after {ticks} ticks");
    assert_eq!(sink.writes.len(), ticks + 1, "one write per tick plus the snap");
    assert!(!engine.is_running());
}

#[test]
fn idempotent_at_rest() {
    let target = TimelineSchedule::default().evaluate(0.7);
    let mut engine = ConvergenceEngine::with_defaults(target);
    let mut sink = Recorder::default();

    engine.request();
    assert_eq!(engine.tick(&target, &mut sink).unwrap(), Tick::Settled);
    assert_eq!(*engine.current(), target);
    assert_eq!(sink.writes, vec![target, target]);

    engine.request();
    assert_eq!(engine.tick(&target, &mut sink).unwrap(), Tick::Settled);
    assert_eq!(*engine.current(), target);
    assert!(!engine.is_running());
}

#[test]
fn reveal_fields_settle_before_transform_fields() {
    let target = ParameterSet {
        img1_size: 80.0,
        img2_translate: 50.0,
        text_opacity: 0.5,
        text_translate: 10.0,
    };
    // Every field starts exactly one unit away from its target.
    let start = ParameterSet {
        img1_size: 81.0,
        img2_translate: 51.0,
        text_opacity: 1.5,
        text_translate: 11.0,
    };
    let mut engine = ConvergenceEngine::with_defaults(start);
    let mut sink = Recorder::default();
    engine.request();

    let mut settled_at = [None::<usize>; 4];
    for n in 1..=200 {
        let tick = engine.tick(&target, &mut sink).unwrap();
        for (slot, field) in settled_at.iter_mut().zip(Field::ALL) {
            let dist = (engine.current().get(field) - target.get(field)).abs();
            if slot.is_none() && dist <= SETTLE_TOLERANCE {
                *slot = Some(n);
            }
        }
        if tick == Tick::Settled {
            break;
        }
    }
    let [img1, img2, opacity, rise] = settled_at.map(|s| s.expect("field never settled"));
    assert!(opacity < img1, "opacity {opacity} vs img1 {img1}");
    assert!(rise < img2, "text rise {rise} vs img2 {img2}");
}

#[test]
fn retarget_mid_loop_continues_from_current() {
    let schedule = TimelineSchedule::default();
    let mut engine = ConvergenceEngine::with_defaults(schedule.initial());
    let mut sink = Recorder::default();
    engine.request();

    let far = schedule.evaluate(1.0);
    for _ in 0..10 {
        engine.tick(&far, &mut sink).unwrap();
    }
    let mid_flight = *engine.current();
    assert!(engine.is_running());

    // User scrolls back to the top while the loop is still running.
    let back = schedule.evaluate(0.0);
    assert!(!engine.request(), "a second loop must not be armed");
    engine.tick(&back, &mut sink).unwrap();
    let rates = engine.rates();
    for field in Field::ALL {
        let step = (engine.current().get(field) - mid_flight.get(field)).abs();
        let room = (back.get(field) - mid_flight.get(field)).abs();
        assert!(
            step <= room * rates.for_field(field) + 1e-4,
            "{field:?} jumped {step} with {room} remaining"
        );
    }
}

#[test]
fn custom_rates_are_honoured() {
    let rates = Rates::from_base(0.5, 2.0);
    assert_eq!(rates.reveal, 1.0);
    let start = ParameterSet::default();
    let target = ParameterSet {
        img1_size: 10.0,
        img2_translate: 10.0,
        text_opacity: 1.0,
        text_translate: 10.0,
    };
    let mut engine = ConvergenceEngine::new(start, rates, 0.01);
    let mut sink = Recorder::default();
    engine.request();
    assert_eq!(engine.tick(&target, &mut sink).unwrap(), Tick::Continue);
    assert_eq!(engine.current().img1_size, 5.0);
    assert_eq!(engine.current().text_opacity, 1.0);
    assert_eq!(engine.ticks(), 1);
}
