multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_PARAMETER, ERR_UNAUTHORIZED};

/// The privileged identity shared by all three ledgers: it distributes pool
/// funds, triggers the emergency drain and owns the governance settings.
#[multiversx_sc::module]
pub trait TreasuryModule {
    #[endpoint(setTreasury)]
    fn set_treasury(&self, new_treasury: ManagedAddress) {
        self.require_treasury();
        require!(!new_treasury.is_zero(), ERR_INVALID_PARAMETER);

        let previous = self.treasury().get();
        self.treasury().set(&new_treasury);
        self.treasury_changed_event(&previous, &new_treasury);
    }

    fn require_treasury(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.treasury().get(), ERR_UNAUTHORIZED);
        caller
    }

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[event("treasuryChanged")]
    fn treasury_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] current: &ManagedAddress,
    );
}
