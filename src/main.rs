// LiteDuco Miner - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.0.0
//
// Command-line entry point: parse arguments, pick the nonce search strategy
// once, then run one worker per thread until the process is killed.

use clap::Parser;
use liteduco::{
    HttpPoolLocator, NonceSearchEngine, Result, RetryPolicy, StaticPoolLocator, TcpDialer,
    WorkerContext, WorkerPool,
    core::types::Args,
    pool::PoolLocator,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    init_tracing();

    let engine = NonceSearchEngine::detect(args.no_fasthash);
    let locator: Arc<dyn PoolLocator> = match &args.pool {
        Some(pool) => {
            info!("📍 Pool: {} (fixed)", pool);
            Arc::new(StaticPoolLocator::new(pool.clone()))
        }
        None => {
            info!("📍 Pool discovery: {}", args.discovery_url);
            Arc::new(HttpPoolLocator::new(args.discovery_url.clone())?)
        }
    };

    let template = WorkerContext {
        username: args.username.clone(),
        mining_key: args.mining_key.clone(),
        difficulty_preference: args.difficulty,
        thread_id: 0,
        rig_prefix: args.rig_prefix.clone(),
    };

    let pool = WorkerPool::new(
        template,
        args.threads,
        engine,
        locator,
        TcpDialer::new(args.io_timeout()),
        RetryPolicy::default(),
    );

    info!("🚀 Starting LiteDuco Miner");
    info!("👷 User: {}", args.username);
    info!("🎯 Difficulty: {}", args.difficulty);
    info!("🧵 Threads: {}", pool.num_threads());

    pool.run().await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
