use minimax_engine::search::cache::PositionCache;

#[test]
fn entry_survives_until_play_moves_past_it() {
    let mut cache: PositionCache<u8> = PositionCache::new();
    cache.insert("k".to_string(), vec![1, 2, 3], 7);

    assert_eq!(cache.purge_stale(6), 0);
    assert!(cache.get("k").is_some());
    assert_eq!(cache.purge_stale(7), 0);
    assert!(cache.get("k").is_some());
    assert_eq!(cache.purge_stale(8), 1);
    assert!(cache.get("k").is_none());
    assert!(cache.is_empty());
}

#[test]
fn purge_only_touches_older_entries() {
    let mut cache: PositionCache<u8> = PositionCache::new();
    for (i, stale_at) in [1u32, 2, 3, 4, 5].into_iter().enumerate() {
        cache.insert(format!("p{i}"), vec![i as u8], stale_at);
    }
    assert_eq!(cache.purge_stale(4), 3);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("p3").map(|e| e.stale_at), Some(4));
    assert_eq!(cache.get("p4").map(|e| e.moves.clone()), Some(vec![4]));
}

#[test]
fn reinsert_replaces_entry() {
    let mut cache: PositionCache<u8> = PositionCache::new();
    cache.insert("k".to_string(), vec![1], 2);
    cache.insert("k".to_string(), vec![9], 5);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.purge_stale(3), 0);
    assert_eq!(cache.get("k").map(|e| e.moves.clone()), Some(vec![9]));
    cache.clear();
    assert!(cache.is_empty());
}
