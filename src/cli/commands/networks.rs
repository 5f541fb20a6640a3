use crate::errors::AppResult;
use crate::types::NetworkParams;
use clap::Args;

/// List the known networks and their address version bytes
#[derive(Args)]
pub struct NetworksCommand {}

impl NetworksCommand {
    pub fn run(&self) -> AppResult<()> {
        println!("{:<10} {:>10} {:>10}", "network", "pubkeyhash", "scripthash");
        for (name, params) in NetworkParams::known_networks() {
            println!(
                "{:<10} {:>10} {:>10}",
                name,
                format!("0x{:02x}", params.pubkey_hash_version),
                format!("0x{:02x}", params.script_hash_version)
            );
        }
        Ok(())
    }
}
