//! Tests for exclusive stream ownership under concurrency.

use logtree::{Admission, Error, Level, Logger, SeverityBuffer, Stream};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

type Records = Arc<Mutex<Vec<(Level, String)>>>;

fn recording_root(timeout: Duration) -> (Arc<Logger>, Records) {
    let records: Records = Arc::default();
    let sink = Arc::clone(&records);
    let root = Logger::builder()
        .level(Level::Debug)
        .contention_timeout(timeout)
        .sink(move |level, message, _| {
            sink.lock().unwrap().push((level, message.to_string()));
        })
        .build();
    (root, records)
}

#[test]
fn concurrent_messages_never_interleave() {
    const THREADS: usize = 8;
    const TOKENS: usize = 50;

    let (root, records) = recording_root(Duration::from_secs(10));
    let barrier = Barrier::new(THREADS);

    thread::scope(|s| {
        for t in 0..THREADS {
            let root = &root;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                let mut message = root.info();
                for k in 0..TOKENS {
                    message.push(format_args!("<{t}:{k}>"));
                    thread::yield_now();
                }
                message.finish();
            });
        }
    });

    let records = records.lock().unwrap();
    assert_eq!(records.len(), THREADS);

    let mut seen: Vec<usize> = records
        .iter()
        .map(|(_, line)| {
            let t: usize = line[1..line.find(':').unwrap()].parse().unwrap();
            let expected: String = (0..TOKENS).map(|k| format!("<{t}:{k}>")).collect();
            assert_eq!(line, &expected);
            t
        })
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..THREADS).collect::<Vec<_>>());
}

#[test]
fn streams_do_not_contend_with_each_other() {
    let (root, records) = recording_root(Duration::from_secs(10));
    let held = Barrier::new(2);
    let done = Barrier::new(2);

    thread::scope(|s| {
        s.spawn(|| {
            root.append(Stream::Warning, "held");
            held.wait();
            done.wait();
            root.flush(Stream::Warning);
        });
        s.spawn(|| {
            held.wait();
            // Would block for the whole contention timeout if streams shared a gate.
            root.error().append("independent").finish();
            let other = root.child("OTHER");
            other.warning().append("other node").finish();
            done.wait();
        });
    });

    let lines: Vec<String> = records.lock().unwrap().iter().map(|r| r.1.clone()).collect();
    assert_eq!(lines, ["independent", "[OTHER] other node", "held"]);
}

#[test]
fn waiting_writer_takes_over_after_release() {
    let buffer = SeverityBuffer::new(Stream::Info, Duration::from_secs(10));
    let claimed = Barrier::new(2);

    thread::scope(|s| {
        s.spawn(|| {
            assert_eq!(buffer.acquire(), Admission::Claimed);
            claimed.wait();
            thread::sleep(Duration::from_millis(50));
            buffer.finalize(|text| assert_eq!(text, "")).unwrap();
        });
        s.spawn(|| {
            claimed.wait();
            assert_eq!(buffer.acquire(), Admission::Handoff);
            assert_eq!(buffer.owner(), Some(thread::current().id()));
            buffer.finalize(|_| {}).unwrap();
        });
    });

    assert!(!buffer.is_busy());
}

#[test]
fn owner_reacquiring_is_held() {
    let buffer = SeverityBuffer::new(Stream::Debug, Duration::from_secs(1));
    assert_eq!(buffer.acquire_and_append("a", |_| {}), Admission::Claimed);
    assert_eq!(buffer.acquire_and_append("b", |_| {}), Admission::Held);
    assert_eq!(buffer.pending_len(), 2);

    let mut delivered = String::new();
    buffer.finalize(|text| delivered.push_str(text)).unwrap();
    assert_eq!(delivered, "ab");
    assert_eq!(buffer.pending_len(), 0);
}

#[test]
fn finalize_requires_ownership() {
    let buffer = SeverityBuffer::new(Stream::Critical, Duration::from_secs(1));
    assert!(matches!(
        buffer.finalize(|_| {}),
        Err(Error::NotOwner(Stream::Critical))
    ));

    thread::scope(|s| {
        s.spawn(|| buffer.acquire());
    });
    assert!(buffer.is_busy());
    assert!(matches!(buffer.finalize(|_| {}), Err(Error::NotOwner(_))));
}

#[test]
fn abandoned_stream_is_reclaimed_with_diagnostic() {
    let (root, records) = recording_root(Duration::from_millis(50));

    thread::scope(|s| {
        s.spawn(|| {
            // Never flushed.
            root.append(Stream::Info, "stale ");
        });
    });

    let admission = root.append(Stream::Info, "fresh");
    assert!(admission.was_reclaimed());
    root.flush(Stream::Info);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, Level::Error);
    assert!(records[0].1.contains("forgot to finalize the info stream"));
    assert_eq!(records[1], (Level::Info, "stale fresh".to_string()));
}

#[test]
fn reclaim_timeout_restarts_on_handoff() {
    let buffer = SeverityBuffer::new(Stream::Info, Duration::from_millis(200));
    let claimed = Barrier::new(3);

    thread::scope(|s| {
        s.spawn(|| {
            buffer.acquire();
            claimed.wait();
            thread::sleep(Duration::from_millis(20));
            buffer.finalize(|_| {}).unwrap();
        });
        for _ in 0..2 {
            s.spawn(|| {
                claimed.wait();
                let admission = buffer.acquire();
                assert!(!admission.was_reclaimed(), "{admission:?}");
                thread::sleep(Duration::from_millis(20));
                buffer.finalize(|_| {}).unwrap();
            });
        }
    });
}
