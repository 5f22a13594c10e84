use crate::error::Error;
use crate::types::{DataKey, LedgerConfig};
use soroban_sdk::{log, xdr::ToXdr, Env, String, Val};

/// Pass-through to the contract's persistent storage.
///
/// One flat String-keyed namespace holds contract records, assignee
/// records and raw entries alike. No caching, no retry: whatever the host
/// refuses aborts the invocation.
pub struct Storage;

impl Storage {
    // Config
    pub fn get_config(env: &Env) -> LedgerConfig {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .unwrap_or_default()
    }

    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &LedgerConfig) {
        env.storage().instance().set(&DataKey::Config, config);
        env.storage()
            .instance()
            .extend_ttl(config.ttl_threshold, config.ttl_extend_to);
    }

    // Entries
    pub fn put(env: &Env, key: &String, value: &Val) -> Result<(), Error> {
        let config = Self::get_config(env);

        // Counts the value's XDR only, not the key
        let size = (*value).to_xdr(env).len();
        if size > config.max_entry_size {
            log!(env, "entry rejected", key.clone(), size);
            return Err(Error::EntryTooLarge);
        }

        env.storage().persistent().set(key, value);
        env.storage()
            .persistent()
            .extend_ttl(key, config.ttl_threshold, config.ttl_extend_to);
        Ok(())
    }

    pub fn get(env: &Env, key: &String) -> Result<Val, Error> {
        let value: Val = env
            .storage()
            .persistent()
            .get(key)
            .ok_or(Error::NotFound)?;

        let config = Self::get_config(env);
        env.storage()
            .persistent()
            .extend_ttl(key, config.ttl_threshold, config.ttl_extend_to);
        Ok(value)
    }

    pub fn has(env: &Env, key: &String) -> bool {
        env.storage().persistent().has(key)
    }

    pub fn delete(env: &Env, key: &String) {
        env.storage().persistent().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContractLedger;
    use soroban_sdk::{Bytes, IntoVal, TryFromVal};

    #[test]
    fn test_put_get_delete() {
        let env = Env::default();
        let contract_id = env.register(ContractLedger, ());

        env.as_contract(&contract_id, || {
            let key = String::from_str(&env, "k1");
            let value: Val = Bytes::from_slice(&env, b"v1").into_val(&env);

            assert_eq!(Storage::get(&env, &key).err(), Some(Error::NotFound));

            Storage::put(&env, &key, &value).unwrap();
            assert!(Storage::has(&env, &key));
            let stored = Storage::get(&env, &key).unwrap();
            assert_eq!(
                Bytes::try_from_val(&env, &stored).unwrap(),
                Bytes::from_slice(&env, b"v1")
            );

            Storage::delete(&env, &key);
            assert!(!Storage::has(&env, &key));
            assert_eq!(Storage::get(&env, &key).err(), Some(Error::NotFound));
        });
    }

    #[test]
    fn test_put_overwrites() {
        let env = Env::default();
        let contract_id = env.register(ContractLedger, ());

        env.as_contract(&contract_id, || {
            let key = String::from_str(&env, "k1");
            let first: Val = 1u32.into_val(&env);
            let second: Val = 2u32.into_val(&env);

            Storage::put(&env, &key, &first).unwrap();
            Storage::put(&env, &key, &second).unwrap();

            let stored = Storage::get(&env, &key).unwrap();
            assert_eq!(u32::try_from_val(&env, &stored).unwrap(), 2);
        });
    }

    #[test]
    fn test_entry_size_limit() {
        let env = Env::default();
        let contract_id = env.register(ContractLedger, ());

        env.as_contract(&contract_id, || {
            Storage::set_config(
                &env,
                &LedgerConfig {
                    max_entry_size: 64,
                    ..LedgerConfig::default()
                },
            );

            let key = String::from_str(&env, "big");
            let small: Val = Bytes::from_array(&env, &[1u8; 16]).into_val(&env);
            let large: Val = Bytes::from_array(&env, &[1u8; 128]).into_val(&env);

            assert_eq!(Storage::put(&env, &key, &small), Ok(()));
            assert_eq!(Storage::put(&env, &key, &large), Err(Error::EntryTooLarge));

            // Rejected write leaves the previous entry in place
            let stored = Storage::get(&env, &key).unwrap();
            assert_eq!(Bytes::try_from_val(&env, &stored).unwrap().len(), 16);

            // Only the value counts toward the limit
            let long_key = String::from_bytes(&env, &[b'k'; 96]);
            assert_eq!(Storage::put(&env, &long_key, &small), Ok(()));
        });
    }

    #[test]
    fn test_config_defaults_until_set() {
        let env = Env::default();
        let contract_id = env.register(ContractLedger, ());

        env.as_contract(&contract_id, || {
            assert!(!Storage::has_config(&env));
            assert_eq!(Storage::get_config(&env), LedgerConfig::default());
        });
    }
}
