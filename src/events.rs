//! Contract events.
//!
//! Topic layout (symbol first, then indexed identifiers):
//!
//! | event        | topics                              | data                          |
//! |--------------|-------------------------------------|-------------------------------|
//! | `init`       | `(init, admin)`                     | `token`                       |
//! | `admin_set`  | `(admin_set, old_admin)`            | `new_admin`                   |
//! | `paused`     | `(paused, admin)`                   | `bool`                        |
//! | `cfg_set`    | `(cfg_set, field)`                  | `(old, new)`                  |
//! | `split_def`  | `(split_def, work_id)`              | `(owner, recipient_count)`    |
//! | `split_upd`  | `(split_upd, work_id)`              | `(updater, old_count, new_count)` |
//! | `payout`     | `(payout, work_id, recipient)`      | `amount`                      |
//! | `dist`       | `(dist, work_id, payer)`            | `(amount, distributed)`       |
//! | `next_id`    | `(next_id,)`                        | `work_id`                     |

use soroban_sdk::{symbol_short, Address, Env, Symbol};

const EVENT_INIT: Symbol = symbol_short!("init");
const EVENT_ADMIN_SET: Symbol = symbol_short!("admin_set");
const EVENT_PAUSED: Symbol = symbol_short!("paused");
const EVENT_CONFIG_SET: Symbol = symbol_short!("cfg_set");
const EVENT_SPLIT_DEFINED: Symbol = symbol_short!("split_def");
const EVENT_SPLIT_UPDATED: Symbol = symbol_short!("split_upd");
const EVENT_PAYOUT: Symbol = symbol_short!("payout");
const EVENT_DISTRIBUTED: Symbol = symbol_short!("dist");
const EVENT_NEXT_ID: Symbol = symbol_short!("next_id");

// Field names carried in `cfg_set` topics.
pub const FIELD_BASIS_POINTS: Symbol = symbol_short!("bps");
pub const FIELD_MIN_SHARE: Symbol = symbol_short!("min_share");
pub const FIELD_MAX_SHARE: Symbol = symbol_short!("max_share");
pub const FIELD_MAX_SPLITS: Symbol = symbol_short!("max_split");

pub fn initialized(env: &Env, admin: &Address, token: &Address) {
    env.events()
        .publish((EVENT_INIT, admin.clone()), token.clone());
}

pub fn admin_changed(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events()
        .publish((EVENT_ADMIN_SET, old_admin.clone()), new_admin.clone());
}

pub fn pause_changed(env: &Env, admin: &Address, paused: bool) {
    env.events().publish((EVENT_PAUSED, admin.clone()), paused);
}

pub fn config_changed(env: &Env, field: Symbol, old: u32, new: u32) {
    env.events().publish((EVENT_CONFIG_SET, field), (old, new));
}

pub fn split_defined(env: &Env, work_id: u64, owner: &Address, recipient_count: u32) {
    env.events().publish(
        (EVENT_SPLIT_DEFINED, work_id),
        (owner.clone(), recipient_count),
    );
}

pub fn split_updated(
    env: &Env,
    work_id: u64,
    updater: &Address,
    old_count: u32,
    new_count: u32,
) {
    env.events().publish(
        (EVENT_SPLIT_UPDATED, work_id),
        (updater.clone(), old_count, new_count),
    );
}

pub fn payout(env: &Env, work_id: u64, recipient: &Address, amount: i128) {
    env.events()
        .publish((EVENT_PAYOUT, work_id, recipient.clone()), amount);
}

pub fn distributed(env: &Env, work_id: u64, payer: &Address, amount: i128, distributed: i128) {
    env.events().publish(
        (EVENT_DISTRIBUTED, work_id, payer.clone()),
        (amount, distributed),
    );
}

pub fn work_id_issued(env: &Env, work_id: u64) {
    env.events().publish((EVENT_NEXT_ID,), work_id);
}
