// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/protocol_test.rs
// Version: 1.0.0
//
// This file contains tests for the job protocol of the LiteDuco miner, located
// in the tests directory. It covers message construction, job parsing and
// share feedback parsing.
//
// Tree Location:
// - tests/protocol_test.rs (job protocol tests)
// - Depends on: liteduco-miner

#[cfg(test)]
mod tests {
    use liteduco::core::types::DifficultyPreference;
    use liteduco::core::{PoolError, SearchResult, WorkerContext};
    use liteduco::pool::JobProtocol;
    use std::time::Duration;

    fn context(preference: DifficultyPreference) -> WorkerContext {
        WorkerContext {
            username: "alice".to_string(),
            mining_key: "None".to_string(),
            difficulty_preference: preference,
            thread_id: 3,
            rig_prefix: "LiteDucoMiner".to_string(),
        }
    }

    #[test]
    fn test_job_request_format() {
        assert_eq!(
            JobProtocol::create_job_request(&context(DifficultyPreference::Low)),
            "JOB,alice,LOW,None"
        );
        let mut medium = context(DifficultyPreference::Medium);
        medium.mining_key = "s3cret".to_string();
        assert_eq!(JobProtocol::create_job_request(&medium), "JOB,alice,MEDIUM,s3cret");
    }

    #[test]
    fn test_parse_job() {
        let job = JobProtocol::parse_job("9f2c1e,4b3a0000000000000000000000000000000000aa,6").unwrap();
        assert_eq!(job.job_id, "9f2c1e");
        assert_eq!(job.expected_hash, "4b3a0000000000000000000000000000000000aa");
        assert_eq!(job.difficulty, 6);
        assert_eq!(job.max_nonce(), 600);
    }

    #[test]
    fn test_parse_job_with_too_few_fields_is_malformed() {
        for raw in ["abc", "a,b", ""] {
            let err = JobProtocol::parse_job(raw).unwrap_err();
            assert!(err.is_malformed_job(), "{:?} should be malformed, got {}", raw, err);
        }
        match JobProtocol::parse_job("a,b") {
            Err(PoolError::MalformedJob { fields, .. }) => assert_eq!(fields, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_job_with_bad_difficulty_is_invalid() {
        let err = JobProtocol::parse_job("abc,def,high").unwrap_err();
        assert!(matches!(err, PoolError::InvalidJob { .. }));
        assert!(!err.is_malformed_job());
    }

    #[test]
    fn test_parse_job_ignores_extra_fields() {
        let job = JobProtocol::parse_job("abc,def,3,extra").unwrap();
        assert_eq!(job.difficulty, 3);
    }

    #[test]
    fn test_submit_message_format() {
        let found = SearchResult::found(150, Duration::from_secs(2));
        assert_eq!(
            JobProtocol::create_submit_message(&found, "LiteDucoMiner3"),
            "150,75,LiteDucoMiner3"
        );

        let fractional = SearchResult { nonce: 7, hash_rate: 2.5, found: true };
        assert_eq!(JobProtocol::create_submit_message(&fractional, "rig"), "7,2.5,rig");

        assert_eq!(
            JobProtocol::create_submit_message(&SearchResult::exhausted(), "LiteDucoMiner0"),
            "0,0,LiteDucoMiner0"
        );
    }

    #[test]
    fn test_exhausted_result_always_reports_zeros() {
        let stale = SearchResult { nonce: 99, hash_rate: 12.0, found: false };
        assert_eq!(JobProtocol::create_submit_message(&stale, "t"), "0,0,t");
    }

    #[test]
    fn test_feedback_requires_exact_good() {
        assert!(JobProtocol::parse_feedback("GOOD").accepted);
        for response in ["good", "BAD", "", "GOOD ", "NOPE", "BAD,Incorrect result"] {
            assert!(!JobProtocol::parse_feedback(response).accepted, "{:?} should be rejected", response);
        }
    }

    #[test]
    fn test_worker_tag() {
        assert_eq!(context(DifficultyPreference::Low).worker_tag(), "LiteDucoMiner3");
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial job protocol tests.
