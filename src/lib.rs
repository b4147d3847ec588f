#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod funding_pool;
pub mod mission_manager;
pub mod observer_registry;
pub mod treasury;
pub mod types;

use errors::ERR_INVALID_PARAMETER;

// ============================================================
// Election Watch
//
// Three ledgers behind one contract:
//   - funding pool: contributions earmarked per mission
//   - mission manager: proposal, quorum voting, lifecycle
//   - observer registry: profiles, applications, selection, reviews
//
// The ledgers share only the treasury identity. Anything one
// ledger needs from another is passed in by the caller.
// ============================================================

#[multiversx_sc::contract]
pub trait ElectionWatch:
    treasury::TreasuryModule
    + funding_pool::FundingPoolModule
    + mission_manager::MissionManagerModule
    + observer_registry::ObserverRegistryModule
{
    #[init]
    fn init(
        &self,
        treasury: ManagedAddress,
        min_contribution: BigUint,
        min_quorum_percent: u64,
        proposal_duration: u64,
        min_reputation: u64,
        max_bio_length: u64,
    ) {
        require!(!treasury.is_zero(), ERR_INVALID_PARAMETER);
        require!(min_quorum_percent <= 100, ERR_INVALID_PARAMETER);

        self.treasury().set(&treasury);

        // ── Funding pool ──
        self.pool_active().set(true);
        self.emergency_mode().set(false);
        self.min_contribution().set(&min_contribution);
        self.total_collected().set(BigUint::zero());
        self.total_distributed().set(BigUint::zero());

        // ── Mission manager ──
        self.last_mission_id().set(0u64);
        self.min_quorum_percent().set(min_quorum_percent);
        self.proposal_duration().set(proposal_duration);

        // ── Observer registry ──
        self.registry_active().set(true);
        self.min_reputation().set(min_reputation);
        self.max_bio_length().set(max_bio_length);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
