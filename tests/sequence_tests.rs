use chromagraph::{
    sequence, AlgorithmConfig, Sequence, SequenceError, SequenceEvent, SequencePolicy, SyncSequence,
};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_seeded_with_individual_and_batch_adds() {
    let mut seq = Sequence::new();
    for i in 0..5 {
        assert!(seq.add(i));
    }
    assert_eq!(seq.add_all(5..=10), 6);

    assert_eq!(seq.len(), 11);
    for i in 0..11 {
        assert_eq!(seq.get(i), Ok(&i));
    }
    assert_eq!(
        seq.get(11),
        Err(SequenceError::IndexOutOfBounds { index: 11, len: 11 })
    );
}

#[test]
fn test_set_policy_keeps_first_occurrences() {
    let mut seq: Sequence<Option<&str>> =
        sequence![Some("a"), None, Some("b"), Some("a"), None, Some("c"), Some("b")];
    assert!(seq.has_duplicates());
    assert!(seq.has_nulls());

    let removed = seq.set_policy(SequencePolicy::SET);
    assert_eq!(removed, 4);
    assert_eq!(seq.as_slice(), &[Some("a"), Some("b"), Some("c")]);

    assert!(!seq.add(Some("a")));
    assert!(!seq.add(None));
    assert_eq!(seq.insert(0, Some("z")), Ok(true));
    assert_eq!(seq.set(1, Some("b")), Ok(None));
    assert_eq!(seq.set(1, Some("a")), Ok(Some(Some("a"))));
    assert_eq!(seq.as_slice(), &[Some("z"), Some("a"), Some("b"), Some("c")]);
}

#[test]
fn test_listener_sees_each_event() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut seq = Sequence::new();
    let sink = Arc::clone(&log);
    let id = seq.subscribe(move |event: &SequenceEvent<'_, u32>| {
        let line = match *event {
            SequenceEvent::Added { index, value } => format!("add {index} {value}"),
            SequenceEvent::Read { index, value } => format!("read {index} {value}"),
            SequenceEvent::Replaced { index, old, new } => format!("set {index} {old}->{new}"),
            SequenceEvent::Removed { index, value } => format!("remove {index} {value}"),
            SequenceEvent::Swapped { a, b } => format!("swap {a} {b}"),
        };
        sink.lock().unwrap().push(line);
    });

    seq.add(7);
    seq.add(8);
    seq.get(1).unwrap();
    seq.set(0, 9).unwrap();
    seq.swap(0, 1).unwrap();
    seq.remove(0).unwrap();
    assert!(seq.unsubscribe(id));
    seq.add(10);

    assert_eq!(
        *log.lock().unwrap(),
        vec!["add 0 7", "add 1 8", "read 1 8", "set 0 7->9", "swap 0 1", "remove 0 8"]
    );
}

#[test]
fn test_synchronized_sequence_across_threads() {
    let shared = Arc::new(Sequence::with_policy(SequencePolicy::SET).synchronized());
    assert!(shared.is_synchronized());

    thread::scope(|s| {
        for t in 0..4u32 {
            let shared = Arc::clone(&shared);
            s.spawn(move || {
                // Overlapping ranges: only the first writer of a value wins.
                for value in (t * 50)..(t * 50 + 100) {
                    shared.add(value);
                }
            });
        }
    });

    assert_eq!(shared.len(), 250);
    let snapshot = shared.snapshot();
    let mut sorted = snapshot.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), snapshot.len());

    let total = shared.with(|seq| seq.iter().map(|&v| u64::from(v)).sum::<u64>());
    assert_eq!(total, (0..250u64).sum::<u64>());
}

#[test]
fn test_round_trip_between_sync_and_plain() {
    let sync: SyncSequence<i32> = sequence![1, 2, 3].synchronized();
    assert_eq!(sync.remove(0), Ok(1));
    let plain = sync.into_unsynchronized();
    assert!(!plain.is_synchronized());
    assert_eq!(plain.into_vec(), vec![2, 3]);
}

#[test]
fn test_policy_and_config_load_from_json() {
    let policy: SequencePolicy =
        serde_json::from_str(r#"{ "accept_duplicates": false, "accept_null_values": true }"#).unwrap();
    assert_eq!(policy, SequencePolicy::PERMISSIVE.accept_duplicates(false));

    let config: AlgorithmConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
    assert_eq!(config, AlgorithmConfig::new().with_seed(42));

    let mut a: Sequence<u32> = (0..20).collect();
    let mut b = a.clone();
    a.disarray(&mut config.rng());
    b.disarray(&mut config.rng());
    assert_eq!(a, b);
}
