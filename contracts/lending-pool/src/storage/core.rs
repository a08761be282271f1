use soroban_sdk::{contracttype, vec, Address, Env, Vec};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const BUMP_CONSTANT: u32 = DAY_IN_LEDGERS * 30;
pub const BUMP_CONSTANT_THRESHOLD: u32 = DAY_IN_LEDGERS * 14;

#[contracttype]
pub enum CoreDataKeys {
    Admin,
    PriceSource,
    ListedAssets,
}

pub struct Core {
    pub env: Env,
}

impl Core {
    #[inline(always)]
    pub fn new(e: &Env) -> Core {
        Core { env: e.clone() }
    }

    pub fn address(&self, key: &CoreDataKeys) -> Option<Address> {
        self.env.storage().instance().get(key)
    }

    pub fn set_address(&self, key: &CoreDataKeys, address: &Address) {
        self.env.storage().instance().set(key, address);
    }

    pub fn is_initialized(&self) -> bool {
        self.env.storage().instance().has(&CoreDataKeys::Admin)
    }

    pub fn listed_assets(&self) -> Vec<Address> {
        self.env
            .storage()
            .instance()
            .get(&CoreDataKeys::ListedAssets)
            .unwrap_or(vec![&self.env])
    }

    pub fn add_listed_asset(&self, asset: &Address) {
        let mut assets: Vec<Address> = self.listed_assets();
        assets.push_back(asset.clone());
        self.env
            .storage()
            .instance()
            .set(&CoreDataKeys::ListedAssets, &assets);
    }

    pub fn bump(&self) {
        self.env
            .storage()
            .instance()
            .extend_ttl(BUMP_CONSTANT_THRESHOLD, BUMP_CONSTANT);
    }
}

pub trait CoreStorageFunc {
    fn _core(&self) -> Core;
}

impl CoreStorageFunc for Env {
    #[inline(always)]
    fn _core(&self) -> Core {
        Core::new(self)
    }
}
