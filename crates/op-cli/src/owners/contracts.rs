use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    interface IOwnable {
        /// @notice Returns the address of the current owner.
        function owner() external view returns (address);
    }
}
