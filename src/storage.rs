use soroban_sdk::{contracttype, panic_with_error, Address, Env, String, Vec};

use crate::errors::SplitError;

/// Default denominator for shares (10000 = 100%).
pub const DEFAULT_BASIS_POINTS: u32 = 10_000;
pub const DEFAULT_MIN_SHARE: u32 = 1;
pub const DEFAULT_MAX_SHARE: u32 = DEFAULT_BASIS_POINTS;
pub const DEFAULT_MAX_SPLITS: u32 = 10;

/// All-zero ed25519 account. Never accepted as a recipient or administrator.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// Ledger-count TTLs, roughly one day / five days for instance data and
// one week / two months for split records.
const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    NextWorkId,
    Split(u64),
    Owner(u64),
    Share(u64, Address),
    Update(u64),
}

/// Global tunables, read by every operation and written only by the admin.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    /// Token contract used to move funds during distribution.
    pub token: Address,
    pub basis_points: u32,
    pub min_share: u32,
    pub max_share: u32,
    pub max_splits: u32,
    pub paused: bool,
}

impl Config {
    pub fn new(admin: Address, token: Address) -> Self {
        Self {
            admin,
            token,
            basis_points: DEFAULT_BASIS_POINTS,
            min_share: DEFAULT_MIN_SHARE,
            max_share: DEFAULT_MAX_SHARE,
            max_splits: DEFAULT_MAX_SPLITS,
            paused: false,
        }
    }
}

/// One party of a split and its share in basis points.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitEntry {
    pub recipient: Address,
    pub share: u32,
}

/// Last successful `update_split` for a work.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateRecord {
    /// Ledger sequence the update landed in.
    pub ledger: u32,
    pub timestamp: u64,
    pub updater: Address,
}

pub fn burn_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, BURN_ADDRESS))
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ── configuration ─────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

/// Loads the configuration, aborting with `NotInitialized` if absent.
pub fn read_config(env: &Env) -> Config {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Config) {
        Some(config) => config,
        None => panic_with_error!(env, SplitError::NotInitialized),
    }
}

pub fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

// ── sequencer ─────────────────────────────────────────────────

pub fn read_next_work_id(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::NextWorkId)
        .unwrap_or(0)
}

pub fn write_next_work_id(env: &Env, id: u64) {
    env.storage().instance().set(&DataKey::NextWorkId, &id);
    bump_instance(env);
}

// ── registry ──────────────────────────────────────────────────

pub fn has_split(env: &Env, work_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Split(work_id))
}

pub fn read_split(env: &Env, work_id: u64) -> Option<Vec<SplitEntry>> {
    read_persistent(env, &DataKey::Split(work_id))
}

pub fn write_split(env: &Env, work_id: u64, splits: &Vec<SplitEntry>) {
    write_persistent(env, &DataKey::Split(work_id), splits);
}

pub fn read_owner(env: &Env, work_id: u64) -> Option<Address> {
    read_persistent(env, &DataKey::Owner(work_id))
}

pub fn write_owner(env: &Env, work_id: u64, owner: &Address) {
    write_persistent(env, &DataKey::Owner(work_id), owner);
}

pub fn read_share(env: &Env, work_id: u64, recipient: Address) -> Option<u32> {
    read_persistent(env, &DataKey::Share(work_id, recipient))
}

/// Writes the share index for every entry. Entries for recipients no longer
/// in the split are left in place.
pub fn write_shares(env: &Env, work_id: u64, splits: &Vec<SplitEntry>) {
    for entry in splits.iter() {
        write_persistent(env, &DataKey::Share(work_id, entry.recipient), &entry.share);
    }
}

// ── audit trail ───────────────────────────────────────────────

pub fn read_update(env: &Env, work_id: u64) -> Option<UpdateRecord> {
    read_persistent(env, &DataKey::Update(work_id))
}

pub fn write_update(env: &Env, work_id: u64, record: &UpdateRecord) {
    write_persistent(env, &DataKey::Update(work_id), record);
}
