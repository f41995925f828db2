//! Loads the address list handed to the engine.
//!
//! The file holds one dotted-decimal address per line. Blank lines and
//! `#` comments are ignored; anything else that does not parse is an error.

use std::fs;
use std::path::Path;

use anyhow::Context;
use netfold_common::network::AddressSet;
use tracing::debug;

pub fn load_addresses(path: &Path) -> anyhow::Result<AddressSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read address list {}", path.display()))?;
    let addresses = parse_address_list(&content)
        .with_context(|| format!("failed to parse address list {}", path.display()))?;
    debug!("Loaded {} unique addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}

pub fn parse_address_list(content: &str) -> anyhow::Result<AddressSet> {
    let literals = content
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty());
    Ok(AddressSet::parse(literals)?)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_list_skips_comments() {
        let content = "# allowlist\n10.0.0.1\n\n10.0.0.2  # office\n10.0.0.1\n";
        let set = parse_address_list(content).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parse_address_list_rejects_garbage() {
        assert!(parse_address_list("10.0.0.1\nnot-an-ip\n").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_addresses(Path::new("/nonexistent/netfold/hosts.txt")).is_err());
    }
}
