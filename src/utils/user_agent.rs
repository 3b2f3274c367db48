/// Client identifier sent to the pool discovery service
pub fn user_agent() -> String {
    format!(
        "DuinoMiner/1.0 liteduco-miner/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
