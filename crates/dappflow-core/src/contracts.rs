//! Fixed contract set on Base, from the deployed Uniswap v3 periphery, plus
//! the minimal ABI surface the workflow calls.

use alloy::primitives::{address, Address};
use alloy::sol;

use crate::domain::TokenInfo;

pub const POSITION_MANAGER: Address = address!("03a520b32C04BF3bEEf7BEb72E919cf822Ed34f1");

pub fn weth() -> TokenInfo {
    TokenInfo {
        address: address!("4200000000000000000000000000000000000006"),
        symbol: "WETH",
        decimals: 18,
    }
}

pub fn usdc() -> TokenInfo {
    TokenInfo {
        address: address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
        symbol: "USDC",
        decimals: 6,
    }
}

pub fn dai() -> TokenInfo {
    TokenInfo {
        address: address!("50c5725949A6F0c72E6C4a641F24049A917DB0Cb"),
        symbol: "DAI",
        decimals: 18,
    }
}

sol! {
    interface Erc20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }

    interface PositionManager {
        struct MintParams {
            address token0;
            address token1;
            uint24 fee;
            int24 tickLower;
            int24 tickUpper;
            uint256 amount0Desired;
            uint256 amount1Desired;
            uint256 amount0Min;
            uint256 amount1Min;
            address recipient;
            uint256 deadline;
        }

        function mint(MintParams calldata params)
            external
            payable
            returns (uint256 tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
    }
}
