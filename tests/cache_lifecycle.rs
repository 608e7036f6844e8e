use caseload_core::cache::MemoCache;

#[test]
fn first_fetch_computes_exactly_once() {
    let mut cache: MemoCache<String> = MemoCache::new();
    let mut calls = 0;

    let value = cache.fetch(&["k"], || {
        calls += 1;
        "computed".to_string()
    });

    assert_eq!(value, "computed");
    assert_eq!(calls, 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn structurally_equal_keys_hit_the_same_entry() {
    let mut cache: MemoCache<String> = MemoCache::new();

    let first = cache.fetch(&vec!["k".to_string()], || "first".to_string());

    // A different in-memory representation of the same logical key must hit:
    // keys are content-hashed, never identity-compared.
    let mut second_called = false;
    let second = cache.fetch(&["k"], || {
        second_called = true;
        "second".to_string()
    });

    assert_eq!(first, "first");
    assert_eq!(second, "first");
    assert!(!second_called, "a hit must not invoke the compute function");
}

#[test]
fn distinct_keys_do_not_collide() {
    let mut cache: MemoCache<u32> = MemoCache::new();

    let xy = cache.fetch(&["x", "y"], || 1);
    let yx = cache.fetch(&["y", "x"], || 2);

    assert_eq!(xy, 1);
    assert_eq!(yx, 2, "key tuples are order-sensitive");
    assert_eq!(cache.len(), 2);
}

#[test]
fn disabled_cache_is_a_pure_pass_through() {
    let mut cache: MemoCache<u32> = MemoCache::new();
    cache.enabled = false;

    let mut calls = 0;
    for _ in 0..3 {
        let value = cache.fetch(&["k"], || {
            calls += 1;
            calls
        });
        assert_eq!(value, calls);
    }

    assert_eq!(calls, 3, "every call must invoke its compute function");
    assert!(cache.is_empty(), "nothing may be stored while disabled");
}

#[test]
fn disabling_also_stops_reads_of_existing_entries() {
    let mut cache: MemoCache<u32> = MemoCache::new();

    let warm = cache.fetch(&["k"], || 1);
    assert_eq!(warm, 1);

    cache.enabled = false;
    let bypassed = cache.fetch(&["k"], || 2);

    assert_eq!(bypassed, 2, "disabled fetch must not read the stored entry");
}

#[test]
fn entries_live_for_the_cache_lifetime() {
    let mut cache: MemoCache<u32> = MemoCache::new();

    for i in 0..100u32 {
        cache.fetch(&("entry", i), || i);
    }

    assert_eq!(cache.len(), 100, "no eviction, no expiry, no size bound");

    let mut recomputed = false;
    let value = cache.fetch(&("entry", 0u32), || {
        recomputed = true;
        999
    });
    assert_eq!(value, 0);
    assert!(!recomputed);
}

#[test]
fn heterogeneous_key_tuples_are_supported() {
    // Mirrors the query layer's usage: a label, an entity id, and a
    // pagination argument object in one key tuple.
    let mut cache: MemoCache<Vec<u32>> = MemoCache::new();

    let page = cache.fetch(&("locale records", "some-id", 10u32), || vec![1, 2, 3]);
    assert_eq!(page, vec![1, 2, 3]);

    let mut recomputed = false;
    let again = cache.fetch(&("locale records", "some-id", 10u32), || {
        recomputed = true;
        Vec::new()
    });
    assert_eq!(again, vec![1, 2, 3]);
    assert!(!recomputed);
}
