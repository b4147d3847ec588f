multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_WITHDRAWN, ERR_BELOW_MINIMUM, ERR_EMERGENCY_MODE, ERR_INSUFFICIENT_BALANCE,
    ERR_INVALID_AMOUNT, ERR_POOL_CLOSED,
};
use crate::treasury;

/// Contributor deposits earmarked per mission. The mission id is an opaque
/// key here: funding does not depend on the mission's approval status.
#[multiversx_sc::module]
pub trait FundingPoolModule: treasury::TreasuryModule {
    // ========================================================
    // ENDPOINT: contribute
    // ========================================================

    #[endpoint(contribute)]
    #[payable("EGLD")]
    fn contribute(&self, mission_id: u64) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();

        require!(self.pool_active().get(), ERR_POOL_CLOSED);
        // Backstop: an emergency drain always closes the pool first.
        require!(!self.emergency_mode().get(), ERR_EMERGENCY_MODE);
        require!(amount >= self.min_contribution().get(), ERR_BELOW_MINIMUM);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        self.contributions(mission_id, &caller)
            .update(|entry| *entry += &amount);
        self.mission_balance(mission_id)
            .update(|balance| *balance += &amount);
        self.total_collected().update(|total| *total += &amount);

        let pool = self.blockchain().get_sc_address();
        self.contribution_event(mission_id, &caller, &amount);
        self.transfer_event(&caller, &pool, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawContribution
    // One withdrawal per (mission, contributor) pair, ever.
    // ========================================================

    #[endpoint(withdrawContribution)]
    fn withdraw_contribution(&self, mission_id: u64) -> BigUint {
        let caller = self.blockchain().get_caller();
        let amount = self.contributions(mission_id, &caller).get();

        require!(amount > 0u64, ERR_INSUFFICIENT_BALANCE);
        require!(
            !self.withdrawn(mission_id, &caller).get(),
            ERR_ALREADY_WITHDRAWN
        );
        require!(self.pool_active().get(), ERR_POOL_CLOSED);

        // Distributions may already have spent part of this entry.
        let balance = self.mission_balance(mission_id).get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);

        self.withdrawn(mission_id, &caller).set(true);
        self.contributions(mission_id, &caller).clear();
        self.mission_balance(mission_id).set(&balance - &amount);
        self.total_collected().update(|total| *total -= &amount);

        self.send().direct_egld(&caller, &amount);

        let pool = self.blockchain().get_sc_address();
        self.contribution_withdrawn_event(mission_id, &caller, &amount);
        self.transfer_event(&pool, &caller, &amount);

        amount
    }

    // ========================================================
    // ENDPOINT: distributeToMission
    // Treasury releases part of a mission's balance.
    // ========================================================

    #[endpoint(distributeToMission)]
    fn distribute_to_mission(&self, mission_id: u64, amount: BigUint, recipient: ManagedAddress) {
        self.require_treasury();

        let balance = self.mission_balance(mission_id).get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);
        require!(self.pool_active().get(), ERR_POOL_CLOSED);

        self.mission_balance(mission_id).set(&balance - &amount);
        self.total_distributed().update(|total| *total += &amount);

        if amount > 0u64 {
            self.send().direct_egld(&recipient, &amount);
        }

        let pool = self.blockchain().get_sc_address();
        self.distribution_event(mission_id, &recipient, &amount);
        self.transfer_event(&pool, &recipient, &amount);
    }

    // ========================================================
    // ENDPOINT: emergencyWithdrawAll
    // Global circuit breaker. Ignores per-mission balances and
    // leaves the pool closed for good.
    // ========================================================

    #[endpoint(emergencyWithdrawAll)]
    fn emergency_withdraw_all(&self, recipient: ManagedAddress) -> BigUint {
        self.require_treasury();
        require!(!self.emergency_mode().get(), ERR_EMERGENCY_MODE);

        self.emergency_mode().set(true);
        self.pool_active().set(false);

        let net_balance = self.total_collected().get() - self.total_distributed().get();
        if net_balance > 0u64 {
            self.send().direct_egld(&recipient, &net_balance);
        }

        let pool = self.blockchain().get_sc_address();
        self.emergency_drain_event(&recipient, &net_balance);
        self.transfer_event(&pool, &recipient, &net_balance);

        net_balance
    }

    // ========================================================
    // Governance settings
    // ========================================================

    #[endpoint(setMinContribution)]
    fn set_min_contribution(&self, amount: BigUint) {
        self.require_treasury();
        self.min_contribution().set(&amount);
        self.min_contribution_changed_event(&amount);
    }

    #[endpoint(setPoolActive)]
    fn set_pool_active(&self, active: bool) {
        self.require_treasury();
        require!(!self.emergency_mode().get(), ERR_EMERGENCY_MODE);
        self.pool_active().set(active);
        self.pool_active_changed_event(active);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getPoolStatus)]
    fn get_pool_status(
        &self,
    ) -> MultiValue6<bool, bool, BigUint, BigUint, BigUint, ManagedAddress> {
        (
            self.pool_active().get(),
            self.emergency_mode().get(),
            self.total_collected().get(),
            self.total_distributed().get(),
            self.min_contribution().get(),
            self.treasury().get(),
        )
            .into()
    }

    #[view(getContribution)]
    fn get_contribution(&self, mission_id: u64, contributor: &ManagedAddress) -> BigUint {
        self.contributions(mission_id, contributor).get()
    }

    #[view(getMissionBalance)]
    fn get_mission_balance(&self, mission_id: u64) -> BigUint {
        self.mission_balance(mission_id).get()
    }

    #[view(hasWithdrawn)]
    fn has_withdrawn(&self, mission_id: u64, contributor: &ManagedAddress) -> bool {
        self.withdrawn(mission_id, contributor).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("contributionWithdrawn")]
    fn contribution_withdrawn_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] contributor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("distribution")]
    fn distribution_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("emergencyDrain")]
    fn emergency_drain_event(&self, #[indexed] recipient: &ManagedAddress, amount: &BigUint);

    /// Ledger of every value movement in or out of the pool.
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("minContributionChanged")]
    fn min_contribution_changed_event(&self, amount: &BigUint);

    #[event("poolActiveChanged")]
    fn pool_active_changed_event(&self, #[indexed] active: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("poolActive")]
    fn pool_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("emergencyMode")]
    fn emergency_mode(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("minContribution")]
    fn min_contribution(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalCollected")]
    fn total_collected(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalDistributed")]
    fn total_distributed(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("contributions")]
    fn contributions(
        &self,
        mission_id: u64,
        contributor: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("missionBalance")]
    fn mission_balance(&self, mission_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("withdrawn")]
    fn withdrawn(&self, mission_id: u64, contributor: &ManagedAddress) -> SingleValueMapper<bool>;
}
