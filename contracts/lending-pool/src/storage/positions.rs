use crate::storage::core::{BUMP_CONSTANT, BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, vec, Address, Env, Map, Vec};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RateMode {
    Variable,
    Stable,
}

/// `principal` is the balance as of `index_snapshot`, it is rebased on every touch.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositInfo {
    pub principal: u64,
    pub index_snapshot: u128,
    pub enabled_as_collateral: bool,
    pub last_action_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BorrowInfo {
    pub principal: u64,
    pub index_snapshot: u128,
    pub rate_mode: RateMode,
    pub stable_rate: u64,
    pub last_action_timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAccount {
    pub deposits: Map<Address, DepositInfo>,
    pub borrows: Map<Address, BorrowInfo>,
    pub collateral: Vec<Address>,
}

impl UserAccount {
    pub fn empty(e: &Env) -> UserAccount {
        UserAccount {
            deposits: Map::new(e),
            borrows: Map::new(e),
            collateral: vec![e],
        }
    }

    pub fn is_collateral(&self, asset: &Address) -> bool {
        self.collateral.contains(asset)
    }

    pub fn enable_collateral(&mut self, asset: &Address) {
        if !self.is_collateral(asset) {
            self.collateral.push_back(asset.clone());
        }
    }

    pub fn disable_collateral(&mut self, asset: &Address) {
        if let Some(position) = self.collateral.first_index_of(asset) {
            self.collateral.remove(position);
        }
    }

    pub fn has_debt(&self) -> bool {
        !self.borrows.is_empty()
    }
}

#[contracttype]
pub enum PositionsDataKeys {
    Account(Address),
}

pub struct Positions {
    pub env: Env,
}

impl Positions {
    #[inline(always)]
    fn new(e: &Env) -> Positions {
        Positions { env: e.clone() }
    }

    /// Accounts are created lazily, an unknown account reads as an empty one.
    pub fn account(&self, account: &Address) -> UserAccount {
        self.env
            .storage()
            .persistent()
            .get(&PositionsDataKeys::Account(account.clone()))
            .unwrap_or(UserAccount::empty(&self.env))
    }

    pub fn set_account(&self, account: &Address, user_account: &UserAccount) {
        self.env
            .storage()
            .persistent()
            .set(&PositionsDataKeys::Account(account.clone()), user_account);
        self.bump(account);
    }

    pub fn bump(&self, account: &Address) {
        self.env.storage().persistent().extend_ttl(
            &PositionsDataKeys::Account(account.clone()),
            BUMP_CONSTANT_THRESHOLD,
            BUMP_CONSTANT,
        );
    }
}

pub trait PositionsDataFunc {
    fn _positions(&self) -> Positions;
}

impl PositionsDataFunc for Env {
    #[inline(always)]
    fn _positions(&self) -> Positions {
        Positions::new(self)
    }
}
