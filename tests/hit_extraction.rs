use objmatch::{find_hits, DistanceBuffer, Hit, ObjMatchError, SearchRect};

fn uniform_buffer(rect: SearchRect, value: f64) -> Vec<f64> {
    vec![value; rect.len()]
}

#[test]
fn single_cell_below_tolerance_yields_one_hit() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(2, 2)] = 0.1;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    let hits = find_hits(&buffer, 0.0, 2.0, 0.2, 0).unwrap();
    assert_eq!(
        hits,
        vec![Hit {
            x: 2,
            y: 2,
            score: 0.05,
        }]
    );
}

#[test]
fn score_at_tolerance_boundary_is_excluded() {
    let rect = SearchRect::new(0, 0, 4, 4).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(1, 1)] = 0.5;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    // (0.5 - 0) / (1 - 0) == tolerance exactly; strict inequality excludes it.
    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn no_candidates_is_empty_not_error() {
    let rect = SearchRect::new(0, 0, 4, 4).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(0, 0)] = 0.0;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    let hits = find_hits(&buffer, 0.0, 1.0, 1e-9, 0).unwrap();
    // Only the zero-distance cell normalizes below the tiny tolerance.
    assert_eq!(hits.len(), 1);

    let buffer =
        DistanceBuffer::from_values(rect, uniform_buffer(rect, 0.9)).unwrap();
    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 0).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn degenerate_range_is_an_error() {
    let rect = SearchRect::new(0, 0, 4, 4).unwrap();
    let buffer = DistanceBuffer::from_values(rect, uniform_buffer(rect, 1.0)).unwrap();

    let err = find_hits(&buffer, 1.0, 1.0, 0.2, 0).err().unwrap();
    assert_eq!(err, ObjMatchError::DegenerateDistances { min: 1.0, max: 1.0 });

    let err = find_hits(&buffer, 2.0, 1.0, 0.2, 0).err().unwrap();
    assert_eq!(err, ObjMatchError::DegenerateDistances { min: 2.0, max: 1.0 });
}

#[test]
fn nearby_hits_merge_keeping_the_better_score() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(2, 2)] = 0.1;
    values[rect.offset_of(4, 4)] = 0.2;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    // Chebyshev separation is 2, strictly below 3: one merged hit survives.
    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 3).unwrap();
    assert_eq!(
        hits,
        vec![Hit {
            x: 2,
            y: 2,
            score: 0.1,
        }]
    );
}

#[test]
fn later_better_candidate_replaces_the_accepted_hit() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(2, 2)] = 0.2;
    values[rect.offset_of(4, 4)] = 0.1;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 3).unwrap();
    assert_eq!(
        hits,
        vec![Hit {
            x: 4,
            y: 4,
            score: 0.1,
        }]
    );
}

#[test]
fn distant_hits_stay_separate_and_rank_by_score() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(1, 1)] = 0.3;
    values[rect.offset_of(8, 8)] = 0.1;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    // Separation 7 is not strictly below 7: both survive.
    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 7).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].x, hits[0].y), (8, 8));
    assert_eq!((hits[1].x, hits[1].y), (1, 1));
    assert!(hits[0].score < hits[1].score);
}

#[test]
fn zero_separation_disables_merging() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(2, 2)] = 0.1;
    values[rect.offset_of(3, 2)] = 0.2;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 0).unwrap();
    assert_eq!(hits.len(), 2);
}

#[test]
fn equal_scores_keep_discovery_order() {
    let rect = SearchRect::new(0, 0, 10, 10).unwrap();
    let mut values = uniform_buffer(rect, 1.0);
    values[rect.offset_of(1, 1)] = 0.1;
    values[rect.offset_of(5, 5)] = 0.1;
    let buffer = DistanceBuffer::from_values(rect, values).unwrap();

    let hits = find_hits(&buffer, 0.0, 1.0, 0.5, 0).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!((hits[0].x, hits[0].y), (1, 1));
    assert_eq!((hits[1].x, hits[1].y), (5, 5));
}

#[test]
fn chebyshev_separation() {
    let a = Hit {
        x: 10,
        y: 20,
        score: 0.0,
    };
    let b = Hit {
        x: 13,
        y: 28,
        score: 0.0,
    };
    assert_eq!(a.separation(&b), 8);
    assert_eq!(b.separation(&a), 8);
    assert_eq!(a.separation(&a), 0);
}
