//! Statistics tests.

use booth_core::core::multiplier::RunResult;
use booth_core::stats::SimStats;

fn result(adds: u64, subs: u64, nops: u64) -> RunResult {
    RunResult {
        bits: 0,
        product: 0,
        adds,
        subs,
        nops,
    }
}

#[test]
fn default_is_all_zero() {
    let stats = SimStats::default();
    assert_eq!(stats.runs, 0);
    assert_eq!(stats.cycles, 0);
}

#[test]
fn record_folds_in_one_run() {
    let mut stats = SimStats::default();
    stats.record(&result(4, 3, 25));
    assert_eq!(stats.runs, 1);
    assert_eq!(stats.cycles, 32);
    assert_eq!(stats.op_add, 4);
    assert_eq!(stats.op_sub, 3);
    assert_eq!(stats.op_nop, 25);
}

#[test]
fn record_accumulates_across_runs() {
    let mut stats = SimStats::default();
    stats.record(&result(1, 1, 30));
    stats.record(&result(0, 0, 32));
    assert_eq!(stats.runs, 2);
    assert_eq!(stats.cycles, 64);
    assert_eq!(stats.op_nop, 62);
}
