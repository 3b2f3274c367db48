// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/engine_test.rs
// Version: 1.0.0
//
// This file contains tests for the nonce search engine of the LiteDuco miner,
// located in the tests directory. It checks the smallest-match contract, search
// exhaustion, determinism and the hash rate definition for both strategies.
//
// Tree Location:
// - tests/engine_test.rs (nonce search tests)
// - Depends on: liteduco-miner

#[cfg(test)]
mod tests {
    use liteduco::core::ducos1_hash_hex;
    use liteduco::core::{Job, SearchResult};
    use liteduco::miner::engine::{FastHasher, NonceSearchEngine, brute_force};
    use std::sync::Arc;
    use std::time::Duration;

    fn job_for(seed: &str, nonce: u64, difficulty: u64) -> Job {
        Job {
            job_id: seed.to_string(),
            expected_hash: ducos1_hash_hex(seed, nonce),
            difficulty,
        }
    }

    /// Straight hex comparison over the whole range, used as the reference
    fn reference_search(job: &Job) -> Option<u64> {
        (0..=job.difficulty * 100).find(|&n| ducos1_hash_hex(&job.job_id, n) == job.expected_hash)
    }

    #[test]
    fn test_brute_force_finds_nonce_one() {
        let job = job_for("abc123", 1, 1);
        let result = brute_force(&job);
        assert!(result.found);
        assert_eq!(result.nonce, 1);
    }

    #[test]
    fn test_brute_force_finds_nonce_zero() {
        let job = job_for("f00dbabe", 0, 5);
        let result = brute_force(&job);
        assert!(result.found, "A match at nonce 0 is a real match");
        assert_eq!(result.nonce, 0);
        assert_eq!(result.hash_rate, 0.0);
    }

    #[test]
    fn test_brute_force_range_is_inclusive() {
        let job = job_for("edge", 300, 3);
        let result = brute_force(&job);
        assert!(result.found, "100 * difficulty itself is searched");
        assert_eq!(result.nonce, 300);
    }

    #[test]
    fn test_brute_force_exhausts_outside_range() {
        let job = job_for("edge", 301, 3);
        let result = brute_force(&job);
        assert_eq!(result, SearchResult::exhausted());
        assert_eq!(result.nonce, 0);
        assert_eq!(result.hash_rate, 0.0);
    }

    #[test]
    fn test_brute_force_matches_reference() {
        for (seed, nonce, difficulty) in [("a1b2", 17, 1), ("deadbeef", 999, 10), ("x", 4500, 50)] {
            let job = job_for(seed, nonce, difficulty);
            let result = brute_force(&job);
            assert_eq!(Some(result.nonce), reference_search(&job), "seed {}", seed);
        }
    }

    #[test]
    fn test_brute_force_accepts_uppercase_digest() {
        let mut job = job_for("abc123", 42, 1);
        job.expected_hash = job.expected_hash.to_uppercase();
        let result = brute_force(&job);
        assert!(result.found);
        assert_eq!(result.nonce, 42);
    }

    #[test]
    fn test_brute_force_is_deterministic() {
        let job = job_for("repeat", 250, 4);
        let first = brute_force(&job);
        let second = brute_force(&job);
        assert_eq!((first.nonce, first.found), (second.nonce, second.found));

        let miss = Job { expected_hash: "0".repeat(40), ..job };
        assert_eq!(brute_force(&miss), brute_force(&miss));
    }

    #[test]
    fn test_hash_rate_definition() {
        let result = SearchResult::found(500, Duration::from_millis(250));
        assert!((result.hash_rate - 2000.0).abs() < 1e-9);

        let instant = SearchResult::found(500, Duration::ZERO);
        assert_eq!(instant.hash_rate, 0.0, "Zero elapsed time reports a zero rate");
    }

    #[test]
    fn test_detect_respects_disable_flag() {
        assert!(matches!(NonceSearchEngine::detect(true), NonceSearchEngine::PureBruteForce));
    }

    #[cfg(feature = "fasthash")]
    #[test]
    fn test_detect_prefers_fasthash_when_built_in() {
        let engine = NonceSearchEngine::detect(false);
        assert!(matches!(engine, NonceSearchEngine::NativeFastHash(_)));
        assert_eq!(engine.name(), "fasthash");
    }

    #[cfg(feature = "fasthash")]
    #[test]
    fn test_fasthash_agrees_with_brute_force() {
        let fast = NonceSearchEngine::detect(false);
        let slow = NonceSearchEngine::PureBruteForce;
        for (seed, nonce, difficulty) in [("abc123", 1, 1), ("zero", 0, 2), ("far", 1999, 20), ("miss", 2001, 20)] {
            let job = job_for(seed, nonce, difficulty);
            let a = fast.search(&job);
            let b = slow.search(&job);
            assert_eq!((a.found, a.nonce), (b.found, b.nonce), "seed {}", seed);
        }
    }

    #[test]
    fn test_fast_path_rejects_undecodable_digest() {
        struct Unreachable;
        impl FastHasher for Unreachable {
            fn name(&self) -> &'static str {
                "unreachable"
            }
            fn find_nonce(&self, _: &[u8], _: &[u8; 20], _: u64, _: u64) -> Option<u64> {
                panic!("should not be called for an undecodable digest");
            }
        }

        let engine = NonceSearchEngine::NativeFastHash(Arc::new(Unreachable));
        let job = Job {
            job_id: "abc".to_string(),
            expected_hash: "not-hex".to_string(),
            difficulty: 1,
        };
        assert_eq!(engine.search(&job), SearchResult::exhausted());
    }

    #[test]
    fn test_fast_path_starts_at_zero_and_times_search() {
        struct Fixed;
        impl FastHasher for Fixed {
            fn name(&self) -> &'static str {
                "fixed"
            }
            fn find_nonce(&self, seed: &[u8], _: &[u8; 20], difficulty: u64, start: u64) -> Option<u64> {
                assert_eq!(seed, b"abc123");
                assert_eq!(difficulty, 7);
                assert_eq!(start, 0);
                Some(33)
            }
        }

        let engine = NonceSearchEngine::NativeFastHash(Arc::new(Fixed));
        let result = engine.search(&job_for("abc123", 33, 7));
        assert!(result.found);
        assert_eq!(result.nonce, 33);
        assert!(result.hash_rate >= 0.0);
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial nonce search tests.
