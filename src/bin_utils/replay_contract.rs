use std::collections::HashMap;

use crate::{
    contract::{ContractError, MintContract},
    primitives::{Address, TokenId},
};

/// Stand-in for the `mintableEthToken` storage slot of each contract while
/// replaying a recorded event feed. Unset slots read as zero, like on chain.
#[derive(Debug, Default)]
pub struct ReplayMintContract {
    mintable: HashMap<Address, TokenId>,
}

impl ReplayMintContract {
    pub fn set_mintable_eth_token(&mut self, contract: Address, token_id: TokenId) {
        self.mintable.insert(contract, token_id);
    }
}

impl MintContract for ReplayMintContract {
    fn mintable_eth_token(&self, contract: &Address) -> Result<TokenId, ContractError> {
        Ok(self.mintable.get(contract).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_per_contract() {
        let first = Address::new([1; 20]);
        let second = Address::new([2; 20]);
        let mut contract = ReplayMintContract::default();
        assert_eq!(contract.mintable_eth_token(&first).unwrap(), TokenId::from(0u32));

        contract.set_mintable_eth_token(first, TokenId::from(5u32));
        assert_eq!(contract.mintable_eth_token(&first).unwrap(), TokenId::from(5u32));
        assert_eq!(contract.mintable_eth_token(&second).unwrap(), TokenId::from(0u32));
    }
}
