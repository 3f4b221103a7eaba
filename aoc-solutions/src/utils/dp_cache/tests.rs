//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Fibonacci over dense indices
struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Collatz chain length, sparse indices
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0), Ok(0));
    assert_eq!(cache.get(&1), Ok(1));
    assert_eq!(cache.get(&5), Ok(5));
    assert_eq!(cache.get(&10), Ok(55));
    assert_eq!(cache.get(&20), Ok(6765));
    assert_eq!(cache.get(&90), Ok(2_880_067_194_370_816_120));
}

#[test]
fn test_diamond_dependency_memoization() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let compute_count = Rc::new(Cell::new(0));
    let cache = DpCache::builder()
        .backend(VecBackend::with_capacity(4))
        .problem(Diamond {
            count: compute_count.clone(),
        })
        .build();

    assert_eq!(cache.get(&0), Ok(50));
    assert_eq!(compute_count.get(), 4);

    assert_eq!(cache.get(&0), Ok(50));
    assert_eq!(cache.get(&3), Ok(10));
    assert_eq!(compute_count.get(), 4);
}

#[test]
fn test_backends_keep_first_value() {
    let mut vec_backend: VecBackend<i32> = VecBackend::new();
    assert_eq!(vec_backend.get(&5), None);
    vec_backend.insert(5, 42);
    vec_backend.insert(5, 999);
    assert_eq!(vec_backend.get(&5), Some(&42));
    assert_eq!(vec_backend.get(&3), None);
    vec_backend.insert(10, 100);
    assert_eq!(vec_backend.get(&5), Some(&42));
    assert_eq!(vec_backend.get(&10), Some(&100));

    let mut map_backend: HashMapBackend<String, i32> = HashMapBackend::new();
    map_backend.insert("key1".to_string(), 42);
    map_backend.insert("key1".to_string(), 999);
    assert_eq!(map_backend.get(&"key1".to_string()), Some(&42));
    assert_eq!(map_backend.get(&"key2".to_string()), None);
}

#[test]
fn test_hashmap_backend_with_string_keys() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |s: &String| {
            if s.is_empty() { vec![] } else { vec![s[..s.len() - 1].to_string()] }
        },
        |s: &String, deps: Vec<usize>| if s.is_empty() { 0 } else { deps[0] + 1 },
    );

    assert_eq!(cache.get(&String::new()), Ok(0));
    assert_eq!(cache.get(&"abc".to_string()), Ok(3));
}

#[test]
fn test_collatz_known_values() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);
    assert_eq!(cache.get(&1), Ok(0));
    assert_eq!(cache.get(&8), Ok(3));
    assert_eq!(cache.get(&3), Ok(7));
    assert_eq!(cache.get(&27), Ok(111));
}

#[test]
fn test_closure_matches_trait_problem() {
    let trait_cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
    let closure_cache = DpCache::new(
        VecBackend::new(),
        |n: &usize| if *n <= 1 { vec![] } else { vec![n - 1, n - 2] },
        |n: &usize, deps: Vec<u64>| if *n <= 1 { *n as u64 } else { deps[0] + deps[1] },
    );

    for n in 0..=30 {
        assert_eq!(trait_cache.get(&n), closure_cache.get(&n), "n = {n}");
    }
}

#[test]
fn test_cycle_reported() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |n: &u8| match *n {
            0 => vec![1],
            1 => vec![2],
            2 => vec![0],
            _ => vec![],
        },
        |_: &u8, deps: Vec<u32>| deps.iter().sum::<u32>() + 1,
    );

    assert_eq!(cache.get(&0), Err(DpError::Cycle));
    assert_eq!(cache.get(&3), Ok(1));
}

#[test]
fn test_self_loop_reported() {
    let cache = DpCache::new(VecBackend::new(), |n: &usize| vec![*n], |_: &usize, _: Vec<u8>| 0);
    assert_eq!(cache.get(&7), Err(DpError::Cycle));
}

#[test]
fn test_cache_usable_after_cycle() {
    // 1 <-> 2 cycle, 4 -> 5 is a clean chain
    let cache = DpCache::new(
        VecBackend::new(),
        |n: &usize| match *n {
            1 => vec![2],
            2 => vec![1],
            4 => vec![5],
            _ => vec![],
        },
        |_: &usize, deps: Vec<u32>| deps.first().map_or(1, |d| d * 2),
    );

    assert_eq!(cache.get(&1), Err(DpError::Cycle));
    assert_eq!(cache.get(&4), Ok(2));
    assert_eq!(cache.get(&2), Err(DpError::Cycle));
}
