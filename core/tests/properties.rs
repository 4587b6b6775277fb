//! Property tests: random operation sequences checked against `Vec`.

use contig_core::{Error, Vector};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    InsertN(usize, usize, i32),
    InsertSlice(usize, Vec<i32>),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize, i32),
    Reserve(usize),
    ShrinkToFit,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::PushBack),
        Just(Op::PopBack),
        (any::<usize>(), any::<i32>()).prop_map(|(at, x)| Op::Insert(at, x)),
        (any::<usize>(), 0usize..5, any::<i32>()).prop_map(|(at, n, x)| Op::InsertN(at, n, x)),
        (any::<usize>(), prop::collection::vec(any::<i32>(), 0..6))
            .prop_map(|(at, xs)| Op::InsertSlice(at, xs)),
        any::<usize>().prop_map(Op::Erase),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::EraseRange(a, b)),
        (0usize..40, any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
        (0usize..64).prop_map(Op::Reserve),
        Just(Op::ShrinkToFit),
        Just(Op::Clear),
    ]
}

/// Applies `op` to both containers and checks the capacity rules that apply
/// to it. Positions are reduced modulo the valid range.
fn apply(vec: &mut Vector<i32>, model: &mut Vec<i32>, op: Op) -> Result<(), TestCaseError> {
    let len = model.len();
    let cap = vec.capacity();
    match op {
        Op::PushBack(x) => {
            vec.push_back(x).unwrap();
            model.push(x);
            prop_assert_eq!(vec.capacity(), if len < cap { cap } else { len + 1 });
        }
        Op::PopBack => {
            prop_assert_eq!(vec.pop_back(), model.pop());
            prop_assert_eq!(vec.capacity(), cap);
        }
        Op::Insert(at, x) => {
            let at = at % (len + 1);
            let pos = vec.insert(vec.begin() + at, x).unwrap();
            model.insert(at, x);
            prop_assert_eq!(pos - vec.begin(), at as isize);
        }
        Op::InsertN(at, n, x) => {
            let at = at % (len + 1);
            vec.insert_n(vec.begin() + at, n, &x).unwrap();
            model.splice(at..at, std::iter::repeat_n(x, n));
            prop_assert_eq!(vec.capacity(), if len + n <= cap { cap } else { len + n });
        }
        Op::InsertSlice(at, xs) => {
            let at = at % (len + 1);
            vec.insert_slice(vec.begin() + at, &xs).unwrap();
            model.splice(at..at, xs);
        }
        Op::Erase(at) => {
            if len > 0 {
                let at = at % len;
                let next = vec.erase(vec.begin() + at);
                model.remove(at);
                prop_assert_eq!(next - vec.begin(), at as isize);
            }
        }
        Op::EraseRange(a, b) => {
            let (a, b) = (a % (len + 1), b % (len + 1));
            let (first, last) = (a.min(b), a.max(b));
            vec.erase_range(vec.begin() + first, vec.begin() + last);
            model.drain(first..last);
            prop_assert_eq!(vec.capacity(), cap);
        }
        Op::Resize(n, x) => {
            vec.resize(n, x).unwrap();
            model.resize(n, x);
            prop_assert_eq!(vec.capacity(), if n <= cap { cap } else { n });
        }
        Op::Reserve(n) => {
            vec.reserve(n).unwrap();
            prop_assert_eq!(vec.capacity(), cap.max(n));
        }
        Op::ShrinkToFit => {
            vec.shrink_to_fit().unwrap();
            prop_assert_eq!(vec.capacity(), len);
        }
        Op::Clear => {
            vec.clear();
            model.clear();
            prop_assert_eq!(vec.capacity(), cap);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn matches_vec_model(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut vec = Vector::new();
        let mut model = Vec::new();
        for op in ops {
            apply(&mut vec, &mut model, op)?;
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.capacity() >= vec.len());
            prop_assert_eq!(vec.end() - vec.begin(), vec.len() as isize);
        }
    }

    #[test]
    fn checked_access_agrees_with_length(
        xs in prop::collection::vec(any::<i16>(), 0..20),
        index in 0usize..30,
    ) {
        let vec: Vector<i16> = xs.iter().copied().collect();
        match vec.at(index) {
            Ok(x) => prop_assert_eq!(Some(x), xs.get(index)),
            Err(err) => {
                prop_assert!(index >= xs.len());
                prop_assert_eq!(err, Error::OutOfRange { index, len: xs.len() });
            }
        }
    }

    #[test]
    fn ordering_matches_slices(
        a in prop::collection::vec(0u8..4, 0..6),
        b in prop::collection::vec(0u8..4, 0..6),
    ) {
        let va = Vector::from(a.clone());
        let vb = Vector::from(b.clone());
        prop_assert_eq!(va == vb, a == b);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va < vb, a < b);
    }

    #[test]
    fn reversed_copy_round_trips(xs in prop::collection::vec(any::<u32>(), 0..30)) {
        let vec: Vector<u32> = xs.iter().copied().collect();
        let reversed: Vector<u32> = vec.iter().rev().copied().collect();
        let back: Vec<u32> = reversed.into_iter().rev().collect();
        prop_assert_eq!(back, xs);
    }
}
