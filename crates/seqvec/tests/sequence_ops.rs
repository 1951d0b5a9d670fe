//! End-to-end scenarios exercising the container contract: growth
//! amortization, insert/erase round-trips, assignment, and the
//! re-derivation of positions across reallocation boundaries.

use seqvec::{SeqError, SeqVec};

#[test]
fn prefilled_constructor_contract() {
    // The single-argument constructor pre-fills to the requested
    // capacity; it does NOT start empty.
    let seq = SeqVec::<i32>::new(3);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.capacity(), 3);
    assert!(!seq.is_empty());
    assert_eq!(seq.as_slice(), &[0, 0, 0]);
}

#[test]
fn n_pushes_reallocate_logarithmically() {
    const N: usize = 4096;

    let mut seq = SeqVec::new(0);
    let mut reallocations = 0;
    let mut last_capacity = seq.capacity();

    for i in 0..N {
        seq.push(i);
        if seq.capacity() != last_capacity {
            reallocations += 1;
            last_capacity = seq.capacity();
        }
    }

    assert_eq!(seq.len(), N);
    assert_eq!(seq[N - 1], N - 1);
    // 1.5x growth from zero reaches 4096 in ~21 steps; anything close
    // to N would mean the policy degraded to one realloc per push.
    assert!(
        reallocations <= 32,
        "expected O(log N) reallocations, got {reallocations}"
    );
}

#[test]
fn growth_policy_is_one_point_five_x_plus_one() {
    let mut seq = SeqVec::new(0);
    let mut observed = Vec::new();
    let mut last = seq.capacity();

    for i in 0..100 {
        seq.push(i);
        if seq.capacity() != last {
            observed.push((last, seq.capacity()));
            last = seq.capacity();
        }
    }

    for &(before, after) in &observed {
        assert_eq!(after, before + before / 2 + 1);
    }
}

#[test]
fn insert_then_erase_restores_original_sequence() {
    let mut seq = SeqVec::from([1, 2, 3]);
    let original = seq.clone();

    let pos = seq.insert(seq.begin() + 1, 9);
    assert_eq!(seq.as_slice(), &[1, 9, 2, 3]);
    assert_eq!(seq.len(), 4);

    seq.erase(pos);
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq, original);
}

#[test]
fn assign_grows_and_fills() {
    let mut seq = SeqVec::from([1, 2, 3]);
    seq.assign(5, &7);
    assert_eq!(seq.as_slice(), &[7, 7, 7, 7, 7]);
    assert_eq!(seq.len(), 5);
    assert!(seq.capacity() >= 5);
}

#[test]
fn pop_removes_exactly_one_element() {
    let mut seq = SeqVec::from([10, 20, 30]);
    assert_eq!(seq.pop(), Ok(30));
    assert_eq!(seq.len(), 2);
    assert!(!seq.as_slice().contains(&30));

    assert_eq!(seq.pop(), Ok(20));
    assert_eq!(seq.pop(), Ok(10));
    assert_eq!(seq.pop(), Err(SeqError::Underflow));
}

#[test]
fn equality_and_swap_laws() {
    let a = SeqVec::from([1, 2, 3]);
    let b = SeqVec::from([4, 5]);
    let (a0, b0) = (a.clone(), b.clone());

    let mut x = a;
    let mut y = b;
    x.swap(&mut y);

    assert_eq!(x, b0);
    assert_eq!(y, a0);
}

#[test]
fn reserve_and_shrink_capacity_laws() {
    let mut seq = SeqVec::from([1, 2, 3]);

    seq.reserve(16);
    assert_eq!(seq.capacity(), 16);
    seq.reserve(2);
    assert_eq!(seq.capacity(), 16, "reserve must never shrink");

    seq.shrink_to_fit();
    assert_eq!(seq.capacity(), seq.len());
    assert_eq!(seq.as_slice(), &[1, 2, 3]);
}

#[test]
fn insert_into_full_sequence_re_derives_position_after_growth() {
    // A full sequence forces insert() to reallocate before shifting.
    // The insertion must land correctly even though every pre-growth
    // cursor into the old buffer is invalidated: the operation carries
    // only the position index across the boundary.
    let mut seq: SeqVec<u32> = (0..8).collect();
    assert!(seq.is_full());
    let cap_before = seq.capacity();

    let pos = seq.insert(seq.begin() + 4, 99);

    assert!(seq.capacity() > cap_before, "growth must have happened");
    assert_eq!(seq[pos], 99);
    assert_eq!(seq.as_slice(), &[0, 1, 2, 3, 99, 4, 5, 6, 7]);
}

#[test]
fn cursors_are_re_derived_not_reused_across_reallocation() {
    let mut seq: SeqVec<i32> = (0..4).collect();
    let stale = seq.end();

    // Force a reallocation; `stale` still records position 4 but the
    // sequence has grown past it.
    seq.extend(0..100);

    // The stale cursor is only a position; dereferencing it now hits
    // whatever lives at index 4. Fresh cursors describe the new state.
    assert_eq!(seq.get(stale), Some(&0));
    assert_eq!(seq.end().index(), 104);
    assert_eq!(seq.get(seq.end()), None);
}

#[test]
fn multi_element_insert_and_range_erase() {
    let mut seq = SeqVec::from([1, 6]);
    let pos = seq.insert_slice(seq.begin() + 1, &[2, 3, 4, 5]);
    assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5, 6]);

    let after = seq.erase_range(pos, pos + 4);
    assert_eq!(seq.as_slice(), &[1, 6]);
    assert_eq!(seq[after], 6);
}

#[test]
fn erase_to_tail_returns_end() {
    let mut seq = SeqVec::from([1, 2, 3, 4]);
    let pos = seq.erase_range(seq.begin() + 2, seq.end());
    assert_eq!(seq.as_slice(), &[1, 2]);
    assert_eq!(pos, seq.end());
}

#[test]
fn string_elements_work_through_full_lifecycle() {
    let mut seq = SeqVec::new(0);
    seq.push("alpha".to_string());
    seq.push("beta".to_string());
    let pos = seq.insert(seq.begin() + 1, "between".to_string());

    assert_eq!(seq.len(), 3);
    assert_eq!(seq[pos], "between");

    seq.erase(pos);
    assert_eq!(seq.pop().as_deref(), Ok("beta"));
    assert_eq!(seq.front().map(String::as_str), Ok("alpha"));

    seq.clear();
    assert!(seq.is_empty());
    assert_eq!(seq.front(), Err(SeqError::Underflow));
}

#[test]
fn diagnostic_display_shows_spare_slots() {
    let mut seq = SeqVec::from([1, 2, 3]);
    seq.reserve(5);
    assert_eq!(format!("{seq}"), "{ 1 2 3 | 0 0 }, len=3, capacity=5");

    seq.shrink_to_fit();
    assert_eq!(format!("{seq}"), "{ 1 2 3 }, len=3, capacity=3");
}
