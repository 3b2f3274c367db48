// LiteDuco Miner - Free and Open Source Software Statement
//
// This project, liteduco-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/config_test.rs
// Version: 1.0.0
//
// This file contains tests for command-line configuration of the LiteDuco
// miner, located in the tests directory. It covers defaults, argument
// validation and derived settings.
//
// Tree Location:
// - tests/config_test.rs (configuration tests)
// - Depends on: liteduco-miner, clap

#[cfg(test)]
mod tests {
    use clap::Parser;
    use liteduco::core::types::{Args, DEFAULT_DISCOVERY_URL, DifficultyPreference};
    use std::time::Duration;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["liteduco-miner", "-u", "alice"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.mining_key, "None");
        assert_eq!(args.difficulty, DifficultyPreference::Low);
        assert_eq!(args.threads, 0);
        assert_eq!(args.rig_prefix, "LiteDucoMiner");
        assert_eq!(args.discovery_url, DEFAULT_DISCOVERY_URL);
        assert!(args.pool.is_none());
        assert!(!args.no_fasthash);
        assert_eq!(args.io_timeout(), Some(Duration::from_secs(60)));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_username_is_required() {
        assert!(Args::try_parse_from(["liteduco-miner"]).is_err());
        assert!(parse(&["-u", "  "]).validate().is_err());
    }

    #[test]
    fn test_medium_difficulty() {
        let args = parse(&["-d", "medium"]);
        assert_eq!(args.difficulty, DifficultyPreference::Medium);
        assert_eq!(args.difficulty.to_string(), "MEDIUM");
    }

    #[test]
    fn test_commas_rejected() {
        assert!(parse(&["-u", "a,b"]).validate().is_err());
        assert!(parse(&["-k", "x,y"]).validate().is_err());
        assert!(parse(&["--rig-prefix", "rig,1"]).validate().is_err());
    }

    #[test]
    fn test_pool_address_validation() {
        assert!(parse(&["--pool", "192.168.1.20:2813"]).validate().is_ok());
        assert!(parse(&["--pool", "pool.example.org:6000"]).validate().is_ok());
        assert!(parse(&["--pool", "192.168.1.20"]).validate().is_err());
        assert!(parse(&["--pool", ":2813"]).validate().is_err());
        assert!(parse(&["--pool", "host:70000"]).validate().is_err());
    }

    #[test]
    fn test_thread_limit() {
        assert!(parse(&["-t", "1024"]).validate().is_ok());
        assert!(parse(&["-t", "1025"]).validate().is_err());
    }

    #[test]
    fn test_zero_io_timeout_disables_deadline() {
        assert_eq!(parse(&["--io-timeout", "0"]).io_timeout(), None);
        assert_eq!(parse(&["--io-timeout", "5"]).io_timeout(), Some(Duration::from_secs(5)));
    }
}

// Changelog:
// - v1.0.0 (2026-10-19): Initial configuration tests.
