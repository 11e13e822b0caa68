use std::collections::VecDeque;

use proptest::prelude::*;
use slotring::{Error, Index, RingBuffer, Typed};

/// An operation of a producer or consumer, with a count of elements.
#[derive(Clone, Copy, Debug)]
enum Op {
    Put(usize),
    Get(usize),
    Peek(usize),
    Skip(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0usize..12).prop_map(Op::Put),
        3 => (0usize..12).prop_map(Op::Get),
        1 => (0usize..12).prop_map(Op::Peek),
        1 => (0usize..12).prop_map(Op::Skip),
    ]
}

/// Drive a buffer and a model queue with the same operations.
///
/// Every element is tagged with a running counter so that order violations are visible.
fn run(ops: &[Op], element_size: usize, slots: usize, start: u32) -> std::result::Result<(), TestCaseError> {
    let mut region = vec![0u8; element_size * slots];
    let mut ring = RingBuffer::new(&mut region[..], element_size).unwrap();
    ring.reset_at(Index(start));

    let mut model: VecDeque<u8> = VecDeque::new();
    let mut next = 0u8;

    for &op in ops {
        let used = ring.used();
        let space = ring.space();
        match op {
            Op::Put(count) => {
                let src: Vec<u8> = (0..count * element_size)
                    .map(|_| { next = next.wrapping_add(1); next })
                    .collect();
                let written = ring.put(&src);
                prop_assert_eq!(written, count.min(space));
                model.extend(&src[..written * element_size]);
            },
            Op::Get(count) => {
                let mut dst = vec![0u8; count * element_size];
                let read = ring.get(&mut dst);
                prop_assert_eq!(read, count.min(used));
                let expected: Vec<u8> = model.drain(..read * element_size).collect();
                prop_assert_eq!(&dst[..read * element_size], &expected[..]);
            },
            Op::Peek(count) => {
                let mut dst = vec![0u8; count * element_size];
                let read = ring.peek(&mut dst);
                prop_assert_eq!(read, count.min(used));
                let expected: Vec<u8> = model.iter().take(read * element_size).copied().collect();
                prop_assert_eq!(&dst[..read * element_size], &expected[..]);
            },
            Op::Skip(count) => {
                let skipped = ring.skip(count);
                prop_assert_eq!(skipped, count.min(used));
                model.drain(..skipped * element_size).for_each(drop);
            },
        }

        prop_assert_eq!(ring.used() + ring.space(), slots);
        prop_assert_eq!(ring.used() * element_size, model.len());

        let (front, back) = ring.as_slices();
        let buffered: Vec<u8> = front.iter().chain(back).copied().collect();
        let expected: Vec<u8> = model.iter().copied().collect();
        prop_assert_eq!(buffered, expected);
    }

    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Counts and contents follow a queue model.
    #[test]
    fn matches_queue(
        ops in prop::collection::vec(op(), 0..200),
        element_size in 1usize..5,
        shift in 1u32..5,
    ) {
        run(&ops, element_size, 1 << shift, 0)?;
    }

    /// The same holds for indices about to overflow.
    #[test]
    fn matches_queue_across_overflow(
        ops in prop::collection::vec(op(), 0..200),
        element_size in 1usize..5,
        shift in 1u32..5,
        before in 0u32..64,
    ) {
        run(&ops, element_size, 1 << shift, u32::MAX - before)?;
    }

    /// Any batch that fits an empty buffer is read back unchanged.
    #[test]
    fn fifo_batch(values in prop::collection::vec(any::<u16>(), 0..=16), start in any::<u32>()) {
        let mut region = [0u8; 32];
        let mut ring = Typed::<_, u16>::new(&mut region[..]).unwrap();
        ring.as_raw_mut().reset_at(Index(start));

        prop_assert_eq!(ring.put(&values), values.len());
        let mut out = vec![0u16; values.len()];
        prop_assert_eq!(ring.get(&mut out), values.len());
        prop_assert_eq!(out, values);
        prop_assert!(ring.is_empty());
    }

    /// Only powers of two of at least two slots are accepted.
    #[test]
    fn capacity_validation(len in 0usize..300, element_size in 1usize..9) {
        let mut region = vec![0u8; len];
        let slots = len / element_size;
        let result = RingBuffer::new(&mut region[..], element_size);
        if slots >= 2 && slots.is_power_of_two() {
            prop_assert_eq!(result.map(|ring| ring.capacity()), Ok(slots));
        } else {
            prop_assert_eq!(result.map(|ring| ring.capacity()), Err(Error::InvalidCapacity));
        }
    }
}

/// Random batch sizes written and immediately read back, before and after the index overflow.
#[test]
fn streaming_batches() {
    let mut region = [0u8; 8];
    let mut ring = Typed::<_, u16>::new(&mut region[..]).unwrap();

    for &start in &[0, u32::MAX - 4] {
        ring.as_raw_mut().reset_at(Index(start));
        for round in 0u16..10_000 {
            let len = usize::from(round % 4) + 1;
            let batch = vec![round; len];
            assert_eq!(ring.put(&batch), len);
            assert_eq!(ring.used() + ring.space(), 4);

            let mut out = vec![0u16; len];
            assert_eq!(ring.get(&mut out), len);
            assert_eq!(out, batch);
        }
    }
}

/// Writing more than fits stops at the capacity and keeps the first elements.
#[test]
fn overfill_keeps_oldest() {
    let mut region = [0u8; 8];
    let mut ring = Typed::<_, u16>::new(&mut region[..]).unwrap();

    let written: usize = (0u16..16).map(|value| ring.put(&[value])).sum();
    assert_eq!(written, 4);

    let mut read = Vec::new();
    let mut value = [0u16];
    while ring.get(&mut value) == 1 {
        read.push(value[0]);
    }
    assert_eq!(read, [0, 1, 2, 3]);
}
