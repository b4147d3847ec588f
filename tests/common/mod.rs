// Shared whitebox harness for the Election Watch contract tests.
#![allow(dead_code)]

use election_watch::funding_pool::FundingPoolModule;
use election_watch::mission_manager::MissionManagerModule;
use election_watch::observer_registry::ObserverRegistryModule;
use election_watch::types::MissionStatus;
use election_watch::ElectionWatch;
use multiversx_sc::codec::multi_types::OptionalValue;
use multiversx_sc::types::{Address, ManagedVec};
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, rust_biguint, whitebox_legacy::*, DebugApi,
};

pub const WASM_PATH: &str = "output/election-watch.wasm";

pub const MIN_CONTRIBUTION: u64 = 1_000_000;
pub const MIN_QUORUM_PERCENT: u64 = 51;
pub const PROPOSAL_DURATION: u64 = 1_440;
pub const MIN_REPUTATION: u64 = 50;
pub const MAX_BIO_LENGTH: u64 = 500;

pub const START_NONCE: u64 = 1_000;
pub const ELECTION_DATE: u64 = 1_500;
pub const INITIAL_EGLD: u64 = 100_000_000;

pub struct ElectionWatchSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> election_watch::ContractObj<DebugApi>,
{
    pub b_mock: BlockchainStateWrapper,
    pub treasury: Address,
    pub proposer: Address,
    pub contributor: Address,
    pub donor: Address,
    pub observer: Address,
    pub contract: ContractObjWrapper<election_watch::ContractObj<DebugApi>, ContractObjBuilder>,
}

pub fn setup<ContractObjBuilder>(builder: ContractObjBuilder) -> ElectionWatchSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> election_watch::ContractObj<DebugApi>,
{
    let mut b_mock = BlockchainStateWrapper::new();
    let treasury = b_mock.create_user_account(&rust_biguint!(INITIAL_EGLD));
    let proposer = b_mock.create_user_account(&rust_biguint!(INITIAL_EGLD));
    let contributor = b_mock.create_user_account(&rust_biguint!(INITIAL_EGLD));
    let donor = b_mock.create_user_account(&rust_biguint!(INITIAL_EGLD));
    let observer = b_mock.create_user_account(&rust_biguint!(0));

    let contract =
        b_mock.create_sc_account(&rust_biguint!(0), Some(&treasury), builder, WASM_PATH);

    b_mock
        .execute_tx(&treasury, &contract, &rust_biguint!(0), |sc| {
            sc.init(
                managed_address!(&treasury),
                managed_biguint!(MIN_CONTRIBUTION),
                MIN_QUORUM_PERCENT,
                PROPOSAL_DURATION,
                MIN_REPUTATION,
                MAX_BIO_LENGTH,
            );
        })
        .assert_ok();

    b_mock.set_block_nonce(START_NONCE);

    ElectionWatchSetup {
        b_mock,
        treasury,
        proposer,
        contributor,
        donor,
        observer,
        contract,
    }
}

impl<ContractObjBuilder> ElectionWatchSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> election_watch::ContractObj<DebugApi>,
{
    pub fn new_account(&mut self) -> Address {
        self.b_mock.create_user_account(&rust_biguint!(INITIAL_EGLD))
    }

    // ── Funding pool ──

    pub fn contribute(&mut self, caller: &Address, mission_id: u64, amount: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(amount), |sc| {
                sc.contribute(mission_id);
            })
    }

    pub fn withdraw(&mut self, caller: &Address, mission_id: u64) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.withdraw_contribution(mission_id);
            })
    }

    pub fn distribute(
        &mut self,
        caller: &Address,
        mission_id: u64,
        amount: u64,
        recipient: &Address,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.distribute_to_mission(
                    mission_id,
                    managed_biguint!(amount),
                    managed_address!(recipient),
                );
            })
    }

    pub fn check_mission_balance(&mut self, mission_id: u64, expected: u64) {
        self.b_mock
            .execute_query(&self.contract, |sc| {
                assert_eq!(sc.get_mission_balance(mission_id), managed_biguint!(expected));
            })
            .assert_ok();
    }

    pub fn check_pool_totals(&mut self, collected: u64, distributed: u64) {
        self.b_mock
            .execute_query(&self.contract, |sc| {
                assert_eq!(sc.total_collected().get(), managed_biguint!(collected));
                assert_eq!(sc.total_distributed().get(), managed_biguint!(distributed));
            })
            .assert_ok();
    }

    // ── Mission manager ──

    pub fn propose(
        &mut self,
        caller: &Address,
        election_date: u64,
        budget: u64,
        observer_slots: u32,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.propose_mission(
                    managed_buffer!(b"Kenya"),
                    election_date,
                    managed_biguint!(budget),
                    observer_slots,
                );
            })
    }

    pub fn vote(&mut self, caller: &Address, mission_id: u64, support: bool) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.vote_on_mission(mission_id, support);
            })
    }

    pub fn activate(&mut self, mission_id: u64) -> TxResult {
        let caller = self.treasury.clone();
        self.b_mock
            .execute_tx(&caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.activate_mission(mission_id);
            })
    }

    pub fn mission_status(&mut self, mission_id: u64) -> MissionStatus {
        let mut status = MissionStatus::Proposed;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                status = sc.missions(mission_id).get().status;
            })
            .assert_ok();
        status
    }

    /// Proposes a mission from `proposer` and funds it with a single yes vote.
    pub fn funded_mission(&mut self, observer_slots: u32) -> u64 {
        let proposer = self.proposer.clone();
        self.propose(&proposer, ELECTION_DATE, 5_000_000, observer_slots)
            .assert_ok();
        let mission_id = self.last_mission_id();

        let voter = self.new_account();
        self.vote(&voter, mission_id, true).assert_ok();
        assert_eq!(self.mission_status(mission_id), MissionStatus::Funded);
        mission_id
    }

    /// A funded mission activated on its election date.
    pub fn active_mission(&mut self, observer_slots: u32) -> u64 {
        let mission_id = self.funded_mission(observer_slots);
        self.b_mock.set_block_nonce(ELECTION_DATE);
        self.activate(mission_id).assert_ok();
        mission_id
    }

    pub fn last_mission_id(&mut self) -> u64 {
        let mut id = 0u64;
        self.b_mock
            .execute_query(&self.contract, |sc| {
                id = sc.last_mission_id().get();
            })
            .assert_ok();
        id
    }

    // ── Observer registry ──

    pub fn register(&mut self, caller: &Address, bio: &[u8]) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                let mut languages = ManagedVec::new();
                languages.push(managed_buffer!(b"en"));
                languages.push(managed_buffer!(b"sw"));
                let mut countries = ManagedVec::new();
                countries.push(managed_buffer!(b"Kenya"));
                sc.register_observer(managed_buffer!(bio), languages, countries);
            })
    }

    pub fn apply(
        &mut self,
        caller: &Address,
        mission_id: u64,
        status: MissionStatus,
        reputation_override: Option<u64>,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                let reputation_override = match reputation_override {
                    Some(reputation) => OptionalValue::Some(reputation),
                    None => OptionalValue::None,
                };
                sc.apply_to_mission(mission_id, status, 5, reputation_override);
            })
    }

    pub fn select(
        &mut self,
        caller: &Address,
        mission_id: u64,
        observer: &Address,
        proposer: &Address,
        slots: u32,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.select_observer(
                    mission_id,
                    managed_address!(observer),
                    managed_address!(proposer),
                    slots,
                );
            })
    }

    pub fn review(
        &mut self,
        caller: &Address,
        mission_id: u64,
        observer: &Address,
        rating: u8,
        proposer: &Address,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.contract, &rust_biguint!(0), |sc| {
                sc.submit_review(
                    mission_id,
                    managed_address!(observer),
                    rating,
                    managed_address!(proposer),
                );
            })
    }

    /// Returns (reputation, missions_completed, is_active).
    pub fn observer_profile(&mut self, observer: &Address) -> (u64, u64, bool) {
        let mut profile = (0u64, 0u64, false);
        self.b_mock
            .execute_query(&self.contract, |sc| {
                let stored = sc.observers(&managed_address!(observer)).get();
                profile = (stored.reputation, stored.missions_completed, stored.is_active);
            })
            .assert_ok();
        profile
    }
}
