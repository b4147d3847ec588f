multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_APPLIED, ERR_ALREADY_REGISTERED, ERR_ALREADY_REVIEWED, ERR_ALREADY_SELECTED,
    ERR_INVALID_BIO, ERR_INVALID_RATING, ERR_LOW_REPUTATION, ERR_MISSION_NOT_ACTIVE,
    ERR_NOT_APPLIED, ERR_NOT_REGISTERED, ERR_NOT_SELECTED, ERR_OBSERVER_INACTIVE,
    ERR_REGISTRY_INACTIVE, ERR_SLOTS_FULL, ERR_UNAUTHORIZED,
};
use crate::treasury;
use crate::types::{MissionStatus, Observer, Review};

/// Reputation every new observer starts with.
pub const STARTING_REPUTATION: u64 = 100;

/// Reputation gained from a review rated at or above `HIGH_RATING`.
pub const REVIEW_BONUS: u64 = 10;

pub const HIGH_RATING: u8 = 4;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

// ============================================================
// Observer registry
//
// Mission status, slot count and proposer are handed in by
// the caller (normally a coordinator reading
// getMissionStatusAndSlots). This module never touches the
// mission records.
// ============================================================

#[multiversx_sc::module]
pub trait ObserverRegistryModule: treasury::TreasuryModule {
    #[endpoint(registerObserver)]
    fn register_observer(
        &self,
        bio: ManagedBuffer,
        languages: ManagedVec<ManagedBuffer>,
        countries: ManagedVec<ManagedBuffer>,
    ) {
        let caller = self.blockchain().get_caller();

        require!(self.registry_active().get(), ERR_REGISTRY_INACTIVE);
        require!(self.observers(&caller).is_empty(), ERR_ALREADY_REGISTERED);
        require!(
            bio.len() as u64 <= self.max_bio_length().get(),
            ERR_INVALID_BIO
        );

        let observer = Observer {
            reputation: STARTING_REPUTATION,
            missions_completed: 0,
            bio,
            languages,
            countries,
            joined_at: self.blockchain().get_block_nonce(),
            is_active: true,
            total_earned: BigUint::zero(),
        };
        self.observers(&caller).set(&observer);

        self.observer_registered_event(&caller, observer.joined_at);
    }

    /// `reputation_override`, when given, replaces the stored reputation for
    /// the floor check.
    #[endpoint(applyToMission)]
    fn apply_to_mission(
        &self,
        mission_id: u64,
        mission_status: MissionStatus,
        _observer_slots: u32,
        reputation_override: OptionalValue<u64>,
    ) {
        let caller = self.blockchain().get_caller();

        require!(!self.observers(&caller).is_empty(), ERR_NOT_REGISTERED);
        let observer = self.observers(&caller).get();
        require!(observer.is_active, ERR_OBSERVER_INACTIVE);
        require!(
            mission_status == MissionStatus::Active,
            ERR_MISSION_NOT_ACTIVE
        );
        require!(
            !self.applications(mission_id).contains(&caller),
            ERR_ALREADY_APPLIED
        );

        let reputation = reputation_override
            .into_option()
            .unwrap_or(observer.reputation);
        require!(
            reputation >= self.min_reputation().get(),
            ERR_LOW_REPUTATION
        );

        self.applications(mission_id).insert(caller.clone());
        self.mission_application_event(mission_id, &caller, reputation);
    }

    #[endpoint(selectObserver)]
    fn select_observer(
        &self,
        mission_id: u64,
        observer: ManagedAddress,
        proposer: ManagedAddress,
        slots: u32,
    ) {
        let caller = self.blockchain().get_caller();

        require!(caller == proposer, ERR_UNAUTHORIZED);
        require!(
            self.applications(mission_id).contains(&observer),
            ERR_NOT_APPLIED
        );
        require!(
            !self.selected_observers(mission_id).contains(&observer),
            ERR_ALREADY_SELECTED
        );
        require!(
            self.selected_observers(mission_id).len() < slots as usize,
            ERR_SLOTS_FULL
        );

        self.selected_observers(mission_id).insert(observer.clone());
        self.observer_selected_event(mission_id, &observer, &proposer);
    }

    /// Every review counts as a completed mission for the observer; only
    /// high ratings move reputation, and never downwards.
    #[endpoint(submitReview)]
    fn submit_review(
        &self,
        mission_id: u64,
        observer: ManagedAddress,
        rating: u8,
        proposer: ManagedAddress,
    ) {
        let caller = self.blockchain().get_caller();

        require!(caller == proposer, ERR_UNAUTHORIZED);
        require!(
            self.selected_observers(mission_id).contains(&observer),
            ERR_NOT_SELECTED
        );
        require!(
            self.reviews(mission_id, &caller).is_empty(),
            ERR_ALREADY_REVIEWED
        );
        require!(
            (MIN_RATING..=MAX_RATING).contains(&rating),
            ERR_INVALID_RATING
        );

        let review = Review {
            observer: observer.clone(),
            rating,
            reviewed_at: self.blockchain().get_block_nonce(),
        };
        self.reviews(mission_id, &caller).set(&review);

        let new_reputation = self.observers(&observer).update(|profile| {
            profile.missions_completed += 1;
            if rating >= HIGH_RATING {
                profile.reputation += REVIEW_BONUS;
            }
            profile.reputation
        });

        self.observer_reviewed_event(mission_id, &observer, rating, new_reputation);
    }

    // ========================================================
    // Governance settings
    // ========================================================

    #[endpoint(deactivateObserver)]
    fn deactivate_observer(&self, observer: ManagedAddress) {
        self.require_treasury();
        require!(!self.observers(&observer).is_empty(), ERR_NOT_REGISTERED);

        self.observers(&observer)
            .update(|profile| profile.is_active = false);
        self.observer_deactivated_event(&observer);
    }

    #[endpoint(setRegistryActive)]
    fn set_registry_active(&self, active: bool) {
        self.require_treasury();
        self.registry_active().set(active);
        self.registry_config_changed_event(
            active,
            self.min_reputation().get(),
            self.max_bio_length().get(),
        );
    }

    #[endpoint(setMinReputation)]
    fn set_min_reputation(&self, value: u64) {
        self.require_treasury();
        self.min_reputation().set(value);
        self.registry_config_changed_event(
            self.registry_active().get(),
            value,
            self.max_bio_length().get(),
        );
    }

    #[endpoint(setMaxBioLength)]
    fn set_max_bio_length(&self, value: u64) {
        self.require_treasury();
        self.max_bio_length().set(value);
        self.registry_config_changed_event(
            self.registry_active().get(),
            self.min_reputation().get(),
            value,
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getObserver)]
    fn get_observer(&self, observer: &ManagedAddress) -> OptionalValue<Observer<Self::Api>> {
        if self.observers(observer).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.observers(observer).get())
    }

    #[view(hasApplied)]
    fn has_applied(&self, mission_id: u64, observer: &ManagedAddress) -> bool {
        self.applications(mission_id).contains(observer)
    }

    #[view(isSelected)]
    fn is_selected(&self, mission_id: u64, observer: &ManagedAddress) -> bool {
        self.selected_observers(mission_id).contains(observer)
    }

    #[view(getSelectedObservers)]
    fn get_selected_observers(&self, mission_id: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for observer in self.selected_observers(mission_id).iter() {
            result.push(observer);
        }
        result
    }

    #[view(getReview)]
    fn get_review(
        &self,
        mission_id: u64,
        reviewer: &ManagedAddress,
    ) -> OptionalValue<Review<Self::Api>> {
        if self.reviews(mission_id, reviewer).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(self.reviews(mission_id, reviewer).get())
    }

    #[view(getRegistryConfig)]
    fn get_registry_config(&self) -> MultiValue3<bool, u64, u64> {
        (
            self.registry_active().get(),
            self.min_reputation().get(),
            self.max_bio_length().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("observerRegistered")]
    fn observer_registered_event(&self, #[indexed] observer: &ManagedAddress, joined_at: u64);

    #[event("missionApplication")]
    fn mission_application_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] observer: &ManagedAddress,
        reputation: u64,
    );

    #[event("observerSelected")]
    fn observer_selected_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] observer: &ManagedAddress,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("observerReviewed")]
    fn observer_reviewed_event(
        &self,
        #[indexed] mission_id: u64,
        #[indexed] observer: &ManagedAddress,
        #[indexed] rating: u8,
        reputation: u64,
    );

    #[event("observerDeactivated")]
    fn observer_deactivated_event(&self, #[indexed] observer: &ManagedAddress);

    #[event("registryConfigChanged")]
    fn registry_config_changed_event(
        &self,
        #[indexed] active: bool,
        #[indexed] min_reputation: u64,
        max_bio_length: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("registryActive")]
    fn registry_active(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("minReputation")]
    fn min_reputation(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("maxBioLength")]
    fn max_bio_length(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("observers")]
    fn observers(&self, observer: &ManagedAddress) -> SingleValueMapper<Observer<Self::Api>>;

    #[storage_mapper("applications")]
    fn applications(&self, mission_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("selectedObservers")]
    fn selected_observers(&self, mission_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("reviews")]
    fn reviews(
        &self,
        mission_id: u64,
        reviewer: &ManagedAddress,
    ) -> SingleValueMapper<Review<Self::Api>>;
}
