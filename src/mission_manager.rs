multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_EXISTS, ERR_ALREADY_VOTED, ERR_INVALID_BUDGET, ERR_INVALID_DATE,
    ERR_INVALID_OBSERVER_COUNT, ERR_INVALID_PARAMETER, ERR_INVALID_STATUS, ERR_MISSION_NOT_FOUND,
    ERR_REPORT_MISSING, ERR_STATUS_TRANSITION, ERR_UNAUTHORIZED,
};
use crate::treasury;
use crate::types::{Mission, MissionStatus, VoteTally, REPORT_HASH_LEN};

/// Fewest observers a mission may ask for.
pub const MIN_OBSERVER_SLOTS: u32 = 2;

/// Mission lifecycle and governance voting.
///
/// `Proposed → Funded → Active → Completed → Audited | Rejected`
///
/// Every transition is a guard checked on the call that attempts it; nothing
/// waits. Missions are never deleted.
#[multiversx_sc::module]
pub trait MissionManagerModule: treasury::TreasuryModule {
    // ========================================================
    // ENDPOINT: proposeMission
    // ========================================================

    #[endpoint(proposeMission)]
    fn propose_mission(
        &self,
        country: ManagedBuffer,
        election_date: u64,
        budget: BigUint,
        observer_slots: u32,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_nonce();

        require!(budget > 0u64, ERR_INVALID_BUDGET);
        require!(election_date > now, ERR_INVALID_DATE);
        require!(
            observer_slots >= MIN_OBSERVER_SLOTS,
            ERR_INVALID_OBSERVER_COUNT
        );

        let mission_id = self.last_mission_id().get() + 1;
        require!(self.missions(mission_id).is_empty(), ERR_ALREADY_EXISTS);

        let mission = Mission {
            id: mission_id,
            country,
            election_date,
            budget,
            status: MissionStatus::Proposed,
            proposer: caller.clone(),
            observer_slots,
            total_expenses: BigUint::zero(),
            report_hash: None,
            created_at: now,
            funded_at: None,
            completed_at: None,
        };

        self.missions(mission_id).set(&mission);
        self.vote_tally(mission_id).set(VoteTally::default());
        self.mission_owner(mission_id).set(&caller);
        self.last_mission_id().set(mission_id);

        self.mission_proposed_event(mission_id, &caller, election_date, &mission.budget);

        mission_id
    }

    // ========================================================
    // ENDPOINT: voteOnMission
    // One vote per identity. Quorum is evaluated after every
    // vote, so funding happens as soon as thresholds are met.
    // ========================================================

    #[endpoint(voteOnMission)]
    fn vote_on_mission(&self, mission_id: u64, support: bool) {
        let caller = self.blockchain().get_caller();
        let mut mission = self.require_mission(mission_id);

        require!(
            mission.status == MissionStatus::Proposed,
            ERR_INVALID_STATUS
        );
        require!(
            !self.voter_records(mission_id, &caller).get(),
            ERR_ALREADY_VOTED
        );

        // No expiry: proposalDuration is stored but never checked.
        self.voter_records(mission_id, &caller).set(true);

        let mut tally = self.vote_tally(mission_id).get();
        if support {
            tally.yes += 1;
        } else {
            tally.no += 1;
        }
        self.vote_tally(mission_id).set(tally);

        self.mission_voted_event(mission_id, &caller, support);

        if tally.passes(self.min_quorum_percent().get()) {
            let now = self.blockchain().get_block_nonce();
            mission.status = MissionStatus::Funded;
            mission.funded_at = Some(now);
            self.missions(mission_id).set(&mission);
            self.mission_funded_event(mission_id, tally.yes, tally.no);
        }
    }

    // ========================================================
    // ENDPOINT: activateMission
    // ========================================================

    #[endpoint(activateMission)]
    fn activate_mission(&self, mission_id: u64) {
        let mut mission = self.require_mission(mission_id);

        require!(
            mission.status == MissionStatus::Funded,
            ERR_STATUS_TRANSITION
        );
        let now = self.blockchain().get_block_nonce();
        require!(now >= mission.election_date, ERR_INVALID_DATE);

        mission.status = MissionStatus::Active;
        self.missions(mission_id).set(&mission);

        self.mission_activated_event(mission_id, now);
    }

    // ========================================================
    // ENDPOINT: submitReport
    // Only the proposer, only while active. The digest is
    // written once; the mission cannot return to Active.
    // ========================================================

    #[endpoint(submitReport)]
    fn submit_report(
        &self,
        mission_id: u64,
        report_hash: ManagedByteArray<Self::Api, REPORT_HASH_LEN>,
    ) {
        let caller = self.blockchain().get_caller();
        let mut mission = self.require_mission(mission_id);

        require!(
            mission.status == MissionStatus::Active,
            ERR_INVALID_STATUS
        );
        require!(mission.proposer == caller, ERR_UNAUTHORIZED);

        let now = self.blockchain().get_block_nonce();
        mission.status = MissionStatus::Completed;
        mission.completed_at = Some(now);
        self.report_submitted_event(mission_id, &caller, &report_hash);
        mission.report_hash = Some(report_hash);
        self.missions(mission_id).set(&mission);
    }

    // ========================================================
    // ENDPOINT: auditMission
    // ========================================================

    #[endpoint(auditMission)]
    fn audit_mission(&self, mission_id: u64, approved: bool) {
        let mut mission = self.require_mission(mission_id);

        require!(
            mission.status == MissionStatus::Completed,
            ERR_STATUS_TRANSITION
        );
        require!(mission.report_hash.is_some(), ERR_REPORT_MISSING);

        mission.status = if approved {
            MissionStatus::Audited
        } else {
            MissionStatus::Rejected
        };
        self.missions(mission_id).set(&mission);

        self.mission_audited_event(mission_id, approved);
    }

    // ========================================================
    // Governance settings
    // ========================================================

    #[endpoint(setMinQuorumPercent)]
    fn set_min_quorum_percent(&self, percent: u64) {
        self.require_treasury();
        require!(percent <= 100, ERR_INVALID_PARAMETER);
        self.min_quorum_percent().set(percent);
        self.governance_config_changed_event(percent, self.proposal_duration().get());
    }

    #[endpoint(setProposalDuration)]
    fn set_proposal_duration(&self, blocks: u64) {
        self.require_treasury();
        self.proposal_duration().set(blocks);
        self.governance_config_changed_event(self.min_quorum_percent().get(), blocks);
    }

    fn require_mission(&self, mission_id: u64) -> Mission<Self::Api> {
        require!(!self.missions(mission_id).is_empty(), ERR_MISSION_NOT_FOUND);
        self.missions(mission_id).get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMission)]
    fn get_mission(&self, mission_id: u64) -> OptionalValue<Mission<Self::Api>> {
        if self.missions(mission_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.missions(mission_id).get())
    }

    #[view(getVoteTally)]
    fn get_vote_tally(&self, mission_id: u64) -> VoteTally {
        self.vote_tally(mission_id).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, mission_id: u64, voter: &ManagedAddress) -> bool {
        self.voter_records(mission_id, voter).get()
    }

    #[view(getMissionOwner)]
    fn get_mission_owner(&self, mission_id: u64) -> OptionalValue<ManagedAddress> {
        if self.mission_owner(mission_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.mission_owner(mission_id).get())
    }

    /// What a coordinator passes on to the observer registry.
    #[view(getMissionStatusAndSlots)]
    fn get_mission_status_and_slots(&self, mission_id: u64) -> MultiValue2<MissionStatus, u32> {
        let mission = self.require_mission(mission_id);
        (mission.status, mission.observer_slots).into()
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue2<u64, u64> {
        (
            self.min_quorum_percent().get(),
            self.proposal_duration().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("missionProposed")]
    fn mission_proposed_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] election_date: u64,
        budget: &BigUint,
    );

    #[event("missionVoted")]
    fn mission_voted_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
    );

    #[event("missionFunded")]
    fn mission_funded_event(&self, #[indexed] mission_id: u64, #[indexed] yes: u64, no: u64);

    #[event("missionActivated")]
    fn mission_activated_event(&self, #[indexed] mission_id: u64, activated_at: u64);

    #[event("reportSubmitted")]
    fn report_submitted_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] proposer: &ManagedAddress,
        report_hash: &ManagedByteArray<Self::Api, REPORT_HASH_LEN>,
    );

    #[event("missionAudited")]
    fn mission_audited_event(&self, #[indexed] mission_id: u64, #[indexed] approved: bool);

    #[event("governanceConfigChanged")]
    fn governance_config_changed_event(
        &self,
        #[indexed] min_quorum_percent: u64,
        proposal_duration: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getLastMissionId)]
    #[storage_mapper("lastMissionId")]
    fn last_mission_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("minQuorumPercent")]
    fn min_quorum_percent(&self) -> SingleValueMapper<u64>;

    /// Intended voting window in blocks. Stored, not enforced.
    #[storage_mapper("proposalDuration")]
    fn proposal_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("missions")]
    fn missions(&self, mission_id: u64) -> SingleValueMapper<Mission<Self::Api>>;

    #[storage_mapper("missionVotes")]
    fn vote_tally(&self, mission_id: u64) -> SingleValueMapper<VoteTally>;

    #[storage_mapper("voterRecords")]
    fn voter_records(&self, mission_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("missionOwner")]
    fn mission_owner(&self, mission_id: u64) -> SingleValueMapper<ManagedAddress>;
}
