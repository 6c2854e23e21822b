//! Session driver tests.
//!
//! A session writes its header, then keeps one cycle counter continuous
//! across runs with a single-cycle gap between them, exactly like the
//! reference driver programs.

use std::fs;
use std::io::Write;

use booth_core::config::ScenarioConfig;
use booth_core::sim::Session;
use booth_core::trace::{BufferSink, WriterSink};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn header_is_the_first_line() {
    let sink = BufferSink::new();
    let session = Session::open(sink, "Software Simulation Trace 1", 0).unwrap();
    let sink = session.into_sink();
    assert_eq!(sink.lines(), ["Software Simulation Trace 1"]);
}

#[test]
fn cycles_are_continuous_across_runs() {
    let sink = BufferSink::new();
    let mut session = Session::open(sink, "Software Simulation Trace 1", 0).unwrap();

    let first = session.run(-8, -2).unwrap();
    assert_eq!(session.cycle(), 32);
    let second = session.run(5, 4).unwrap();
    assert_eq!(session.cycle(), 65);

    assert_eq!(first.product, 16);
    assert_eq!(second.product, 20);

    let lines = session.into_sink();
    let lines = lines.lines();
    // 1 header + 2 * 34 trace lines.
    assert_eq!(lines.len(), 69);
    // Run two opens one cycle after run one's final line.
    assert!(lines[34].starts_with(&format!("Cycle:{:12} | product:", 32)));
    assert!(lines[35].starts_with(&format!("Cycle:{:12} | load: 1 |", 33)));
}

#[test]
fn run_all_reports_each_product() {
    let config = ScenarioConfig::swsim1();
    let mut session = Session::open(BufferSink::new(), &config.header, config.start_cycle).unwrap();
    let results = session.run_all(&config.pairs).unwrap();
    let products: Vec<i64> = results.iter().map(|r| r.product).collect();
    assert_eq!(products, [16, 20]);
}

#[test]
fn stats_accumulate_across_runs() {
    let config = ScenarioConfig::swsim2();
    let mut session = Session::open(BufferSink::new(), &config.header, config.start_cycle).unwrap();
    let _ = session.run_all(&config.pairs).unwrap();

    let stats = session.stats();
    assert_eq!(stats.runs, 9);
    assert_eq!(stats.cycles, 288);
    assert_eq!(stats.op_add + stats.op_sub + stats.op_nop, 288);
    // Nine runs with one-cycle gaps between them.
    assert_eq!(session.cycle(), 9 * 32 + 8);
}

#[test]
fn respects_caller_chosen_start_cycle() {
    let mut session = Session::open(BufferSink::new(), "Trace", 1000).unwrap();
    let _ = session.run(1, 1).unwrap();
    assert_eq!(session.cycle(), 1032);
    let sink = session.into_sink();
    assert!(sink.lines()[1].starts_with(&format!("Cycle:{:12} | load: 1 |", 1000)));
}

#[test]
fn file_backed_session_round_trips() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_owned();

    let config = ScenarioConfig::swsim1();
    let sink = WriterSink::new(file);
    let mut session = Session::open(sink, &config.header, config.start_cycle).unwrap();
    let _ = session.run_all(&config.pairs).unwrap();
    let mut file = session.into_sink().into_inner();
    file.flush().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 69);
    assert_eq!(lines[0], "Software Simulation Trace 1");
    assert!(text.ends_with("(busy: 1, ready: 1)\n"));
}
