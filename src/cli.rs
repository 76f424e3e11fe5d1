use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stakepool-controls")]
#[command(author = "quake")]
#[command(version)]
#[command(about = "Withdraw, exit and claim controls for staking pools")]
pub struct Args {
    /// Pool to operate on (unipool-ant-v1-eth, unipool-ant-v2-eth, balancer-ant-v2-usdc)
    #[arg(short, long, default_value = "unipool-ant-v2-eth")]
    pub pool: String,

    /// Staked balance in base units
    /// If not specified, no wallet is considered connected
    #[arg(long)]
    pub staked: Option<String>,

    /// Rewards balance in base units
    #[arg(long)]
    pub rewards: Option<String>,

    /// Report balances as still being fetched
    #[arg(long)]
    pub loading: bool,

    /// Data directory path
    #[arg(long)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show status, label and max amount for every flow
    Status,
    /// Withdraw part of the staked balance
    Withdraw {
        /// Amount in token units, e.g. 1.5
        #[arg(required_unless_present = "max")]
        amount: Option<String>,

        /// Withdraw the whole staked balance
        #[arg(long, conflicts_with = "amount")]
        max: bool,
    },
    /// Withdraw the whole stake together with all rewards
    Exit,
    /// Claim accrued rewards
    Claim,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
