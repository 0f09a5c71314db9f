//! Counter increments racing with telemetry reports.

use daq_template::appfwk::DaqModule;
use daq_template::modules::{RenameMe, RenameMeInfo};
use daq_template::opmon::InfoCollector;
use std::sync::atomic::{AtomicBool, Ordering};

const WORKERS: u64 = 4;
const INCREMENTS_PER_WORKER: u64 = 25_000;

fn report(module: &RenameMe) -> RenameMeInfo {
    let mut ci = InfoCollector::new();
    module.get_info(&mut ci, 0).unwrap();
    ci.record::<RenameMeInfo>().unwrap()
}

#[test]
fn reported_deltas_sum_to_total_increments() {
    let module = RenameMe::new("rm").unwrap();
    let done = AtomicBool::new(false);

    let reported: u64 = std::thread::scope(|s| {
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| {
                s.spawn(|| {
                    for _ in 0..INCREMENTS_PER_WORKER {
                        module.count(1);
                    }
                })
            })
            .collect();

        let reporter = s.spawn(|| {
            let mut sum = 0;
            let mut last_total = 0;
            while !done.load(Ordering::Acquire) {
                let info = report(&module);
                assert!(info.total_amount >= last_total);
                last_total = info.total_amount;
                sum += info.amount_since_last_get_info_call;
            }
            sum
        });

        for worker in workers {
            worker.join().unwrap();
        }
        done.store(true, Ordering::Release);
        reporter.join().unwrap()
    });

    let last = report(&module);
    let expected = WORKERS * INCREMENTS_PER_WORKER;
    assert_eq!(reported + last.amount_since_last_get_info_call, expected);
    assert_eq!(last.total_amount, expected);
    assert_eq!(report(&module).amount_since_last_get_info_call, 0);
}
