use std::sync::Barrier;

use rstest::rstest;
use t3tspray_spray::{RecordingTarget, SprayConfig, SprayEntry, SprayReport};

#[rstest]
#[case(2)]
#[case(8)]
#[case(64)]
fn concurrent_binary_triggers_run_one_sequence(#[case] arrivals: usize) {
	let entry = SprayEntry::activate(SprayConfig::default());
	let target = RecordingTarget::new();
	let barrier = Barrier::new(arrivals);

	let reports: Vec<SprayReport> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..arrivals)
			.map(|_| {
				scope.spawn(|| {
					barrier.wait();
					entry.on_binary_register(&target)
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().expect("trigger thread panicked")).collect()
	});

	let completed = reports.iter().filter(|r| matches!(r, SprayReport::Completed(_))).count();
	let skipped = reports.iter().filter(|r| **r == SprayReport::AlreadyFired).count();
	assert_eq!(completed, 1);
	assert_eq!(skipped, arrivals - 1);
	assert_eq!(target.calls().len(), SprayConfig::default().short_codes.len());
}

#[test]
fn concurrent_cache_triggers_are_independent() {
	const ARRIVALS: usize = 8;
	let entry = SprayEntry::activate(SprayConfig::default());
	let target = RecordingTarget::new();

	std::thread::scope(|scope| {
		for _ in 0..ARRIVALS {
			scope.spawn(|| entry.on_cache_constructed(&target));
		}
	});

	assert_eq!(target.calls().len(), ARRIVALS * 3);
}
