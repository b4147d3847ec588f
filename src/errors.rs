// Error messages carry the ledger's numeric code in parentheses so callers
// can surface it to end users.

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED (100)";

// ── Funding pool ──

pub const ERR_INSUFFICIENT_BALANCE: &str = "ERR_INSUFFICIENT_BALANCE (102)";
pub const ERR_ALREADY_WITHDRAWN: &str = "ERR_ALREADY_WITHDRAWN (103)";
pub const ERR_BELOW_MINIMUM: &str = "ERR_BELOW_MINIMUM (104)";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT (107)";
pub const ERR_POOL_CLOSED: &str = "ERR_POOL_CLOSED (108)";
pub const ERR_EMERGENCY_MODE: &str = "ERR_EMERGENCY_MODE (109)";

// ── Mission manager ──

pub const ERR_ALREADY_VOTED: &str = "ERR_UNAUTHORIZED (100): already voted";
pub const ERR_MISSION_NOT_FOUND: &str = "ERR_MISSION_NOT_FOUND (101)";
pub const ERR_INVALID_STATUS: &str = "ERR_INVALID_STATUS (102)";
pub const ERR_ALREADY_EXISTS: &str = "ERR_ALREADY_EXISTS (103)";
pub const ERR_INVALID_BUDGET: &str = "ERR_INVALID_BUDGET (104)";
pub const ERR_INVALID_DATE: &str = "ERR_INVALID_DATE (105)";
pub const ERR_INVALID_PARAMETER: &str = "ERR_INVALID_PARAMETER (106)";
pub const ERR_REPORT_MISSING: &str = "ERR_REPORT_MISSING (112)";
pub const ERR_INVALID_OBSERVER_COUNT: &str = "ERR_INVALID_OBSERVER_COUNT (113)";
pub const ERR_STATUS_TRANSITION: &str = "ERR_STATUS_TRANSITION (114)";

// ── Observer registry ──

pub const ERR_ALREADY_REGISTERED: &str = "ERR_ALREADY_REGISTERED (101)";
pub const ERR_NOT_REGISTERED: &str = "ERR_NOT_REGISTERED (102)";
pub const ERR_LOW_REPUTATION: &str = "ERR_LOW_REPUTATION (103)";
pub const ERR_INVALID_BIO: &str = "ERR_INVALID_BIO (104)";
pub const ERR_NOT_APPLIED: &str = "ERR_NOT_APPLIED (105)";
pub const ERR_REGISTRY_INACTIVE: &str = "ERR_REGISTRY_INACTIVE (106)";
pub const ERR_MISSION_NOT_ACTIVE: &str = "ERR_MISSION_NOT_ACTIVE (107)";
pub const ERR_ALREADY_APPLIED: &str = "ERR_ALREADY_APPLIED (108)";
pub const ERR_SLOTS_FULL: &str = "ERR_SLOTS_FULL (109)";
pub const ERR_NOT_SELECTED: &str = "ERR_NOT_SELECTED (110)";
pub const ERR_ALREADY_REVIEWED: &str = "ERR_ALREADY_REVIEWED (111)";
pub const ERR_INVALID_RATING: &str = "ERR_INVALID_RATING (112)";
pub const ERR_ALREADY_SELECTED: &str = "ERR_ALREADY_SELECTED (113)";
pub const ERR_OBSERVER_INACTIVE: &str = "ERR_OBSERVER_INACTIVE (114)";
