//! Generated bindings for the external contract interfaces.

use alloy::sol;

sol! {
    /// Simple on-chain message store.
    #[sol(rpc)]
    contract MessageStore {
        function writeMessage(string calldata newMessage) external;
        function readMessage() external view returns (string memory);
    }
}

sol! {
    /// Minimal ERC-20 surface used by the token transfer flow.
    #[sol(rpc)]
    contract Token {
        function transfer(address to, uint256 amount) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
    }
}
