//! Solidity ABI surface of the ENS contracts touched by a wrap.

use alloy_sol_types::sol;

sol! {
    interface IBaseRegistrar {
        function safeTransferFrom(address from, address to, uint256 tokenId, bytes data) external;
        function nameExpires(uint256 id) external view returns (uint256);
    }

    interface INameWrapper {
        function wrap(bytes name, address wrappedOwner, address resolver) external;
    }

    interface IENSRegistry {
        function isApprovedForAll(address owner, address operator) external view returns (bool);
    }
}
