multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Size of a submitted report digest.
pub const REPORT_HASH_LEN: usize = 32;

// ============================================================
// Mission Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum MissionStatus {
    /// Open for governance votes.
    Proposed,
    /// Quorum and strict majority reached.
    Funded,
    /// Election date reached, observers can apply and be selected.
    Active,
    /// Proposer submitted the report digest.
    Completed,
    /// Report accepted. Terminal state.
    Audited,
    /// Report rejected. Terminal state.
    Rejected,
}

// ============================================================
// Mission — the lifecycle record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Mission<M: ManagedTypeApi> {
    pub id: u64,
    pub country: ManagedBuffer<M>,
    /// Block nonce of the election day
    pub election_date: u64,
    /// Requested funding target, informational only
    pub budget: BigUint<M>,
    pub status: MissionStatus,
    pub proposer: ManagedAddress<M>,
    pub observer_slots: u32,
    pub total_expenses: BigUint<M>,
    pub report_hash: Option<ManagedByteArray<M, REPORT_HASH_LEN>>,
    pub created_at: u64,
    pub funded_at: Option<u64>,
    pub completed_at: Option<u64>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug, Default)]
pub struct VoteTally {
    pub yes: u64,
    pub no: u64,
}

impl VoteTally {
    pub fn total(&self) -> u64 {
        self.yes + self.no
    }

    /// Yes votes must reach the quorum share of all votes cast AND form a
    /// strict majority.
    pub fn passes(&self, min_quorum_percent: u64) -> bool {
        let total = self.total();
        let quorum_needed = total * min_quorum_percent / 100;
        self.yes >= quorum_needed && self.yes > total / 2
    }
}

// ============================================================
// Observer — registry profile
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Observer<M: ManagedTypeApi> {
    pub reputation: u64,
    pub missions_completed: u64,
    pub bio: ManagedBuffer<M>,
    pub languages: ManagedVec<M, ManagedBuffer<M>>,
    pub countries: ManagedVec<M, ManagedBuffer<M>>,
    pub joined_at: u64,
    pub is_active: bool,
    pub total_earned: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Review<M: ManagedTypeApi> {
    pub observer: ManagedAddress<M>,
    pub rating: u8,
    pub reviewed_at: u64,
}
