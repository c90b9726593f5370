use serde::{Deserialize, Serialize};

/// Gas price tier quoted by a gas oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GasSpeed {
    Safe,
    Standard,
    Fast,
}

/// On-chain operations a yield position typically pays gas for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasOperation {
    Swap,
    AddLiquidity,
    RemoveLiquidity,
    Stake,
    Unstake,
    Approve,
    Transfer,
}

impl GasOperation {
    pub const ALL: [GasOperation; 7] = [
        Self::Swap,
        Self::AddLiquidity,
        Self::RemoveLiquidity,
        Self::Stake,
        Self::Unstake,
        Self::Approve,
        Self::Transfer,
    ];

    /// Gas units consumed by the operation.
    #[must_use]
    pub fn gas_limit(self) -> u64 {
        match self {
            Self::Swap => 150_000,
            Self::AddLiquidity => 200_000,
            Self::RemoveLiquidity => 150_000,
            Self::Stake => 100_000,
            Self::Unstake => 80_000,
            Self::Approve => 50_000,
            Self::Transfer => 21_000,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::AddLiquidity => "add liquidity",
            Self::RemoveLiquidity => "remove liquidity",
            Self::Stake => "stake",
            Self::Unstake => "unstake",
            Self::Approve => "approve",
            Self::Transfer => "transfer",
        }
    }
}
