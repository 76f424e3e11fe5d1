use std::{fmt, path::PathBuf};

use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::amount::Decimals;

/// Pools known to the wallet.
pub const POOL_NAMES: [&str; 3] = [
    "unipool-ant-v1-eth",
    "unipool-ant-v2-eth",
    "balancer-ant-v2-usdc",
];

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    if let Ok(s) = std::env::var("STAKEPOOL_CONTROLS_DATA") {
        PathBuf::from(s)
    } else if let Some(proj_dirs) = ProjectDirs::from("com", "stakepool", "stakepool-controls") {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Identifies which staking contract a pool's actions target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractGroup(pub String);

impl fmt::Display for ContractGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    pub symbol: String,
    pub decimals: Decimals,
}

impl TokenConfig {
    fn erc20(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals: Decimals::ERC20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pub name: String,
    pub stake_token: TokenConfig,
    pub reward_token: TokenConfig,
    pub contract_group: ContractGroup,
    pub liquidity_url: Option<String>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::unipool_ant_v2_eth()
    }
}

impl PoolConfig {
    pub fn unipool_ant_v1_eth() -> Self {
        Self {
            name: "unipool-ant-v1-eth".to_string(),
            stake_token: TokenConfig::erc20("UNI"),
            reward_token: TokenConfig::erc20("ANT"),
            contract_group: ContractGroup("unipoolAntV1".to_string()),
            liquidity_url: None,
        }
    }

    pub fn unipool_ant_v2_eth() -> Self {
        Self {
            name: "unipool-ant-v2-eth".to_string(),
            stake_token: TokenConfig::erc20("UNI"),
            reward_token: TokenConfig::erc20("ANT"),
            contract_group: ContractGroup("unipoolAntV2".to_string()),
            liquidity_url: Some(
                "https://info.uniswap.org/pair/0x9def9511fec79f83afcbffe4776b1d817dc775ae"
                    .to_string(),
            ),
        }
    }

    pub fn balancer_ant_v2_usdc() -> Self {
        Self {
            name: "balancer-ant-v2-usdc".to_string(),
            stake_token: TokenConfig::erc20("BPT"),
            reward_token: TokenConfig::erc20("ANT"),
            contract_group: ContractGroup("balancer".to_string()),
            liquidity_url: Some(
                "https://pools.balancer.exchange/#/pool/0xde0999ee4e4bea6fecb03bf4ebef2626942ec6f5/"
                    .to_string(),
            ),
        }
    }

    /// Look up a pool by name. Unknown names are an error rather than a
    /// fallback, since actions would target a different contract.
    pub fn from_pool(name: &str) -> Result<Self> {
        match name {
            "unipool-ant-v1-eth" => Ok(Self::unipool_ant_v1_eth()),
            "unipool-ant-v2-eth" => Ok(Self::unipool_ant_v2_eth()),
            "balancer-ant-v2-usdc" => Ok(Self::balancer_ant_v2_usdc()),
            _ => Err(eyre!(
                "Unknown pool '{}' (expected one of: {})",
                name,
                POOL_NAMES.join(", ")
            )),
        }
    }
}
