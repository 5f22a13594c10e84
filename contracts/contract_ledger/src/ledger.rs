use crate::codec::Record;
use crate::error::Error;
use crate::events::*;
use crate::storage::Storage;
use crate::types::{AssigneeRecord, ContractRecord};
use crate::validation::{user_key, Validator};
use soroban_sdk::{log, xdr::ToXdr, Bytes, Env, IntoVal, String, Symbol, TryFromVal, Val};

/// Contract and assignee operations over the state store.
///
/// Arguments arrive as strings; everything is parsed and validated here
/// before a record is built. Each operation is one host invocation, so a
/// read-modify-write inside it is atomic with respect to other callers.
pub struct Ledger;

impl Ledger {
    /// Store a contract record under its contract number.
    ///
    /// Overwrites any entry already under that key.
    #[allow(clippy::too_many_arguments)]
    pub fn create_contract(
        env: &Env,
        contract_number: String,
        description: String,
        owned_by: String,
        file_hash_key: String,
        amount: &String,
        number_of_parts: &String,
        due_date: String,
    ) -> Result<(), Error> {
        Validator::require_non_empty(&contract_number)?;
        let amount = Validator::parse_amount(amount)?;
        let number_of_parts = Validator::parse_count(number_of_parts)?;

        let record = ContractRecord {
            contract_number: contract_number.clone(),
            description,
            owned_by: owned_by.clone(),
            file_hash_key,
            number_of_parts,
            amount,
            due_date,
        };
        Self::store(env, &contract_number, &record)?;

        env.events().publish(
            (Symbol::new(env, "contract_created"), contract_number.clone()),
            ContractCreatedEvent {
                contract_number,
                owned_by,
                amount,
                number_of_parts,
            },
        );

        Ok(())
    }

    /// Store an assignee record under its decimal user id.
    pub fn create_assignee(
        env: &Env,
        user_id: &String,
        is_signed: &String,
        signed_date: String,
        status: String,
    ) -> Result<(), Error> {
        let user_id = Validator::parse_user_id(user_id)?;
        let is_signed = Validator::parse_bool(is_signed)?;
        Validator::check_signature(is_signed, &signed_date)?;

        let key = user_key(env, user_id);
        let record = AssigneeRecord {
            user_id,
            is_signed,
            signed_date,
            status: status.clone(),
        };
        Self::store(env, &key, &record)?;

        env.events().publish(
            (Symbol::new(env, "assignee_created"), key),
            AssigneeCreatedEvent {
                user_id,
                is_signed,
                status,
            },
        );

        Ok(())
    }

    /// Move an assignee from unsigned to signed.
    ///
    /// The flag must read as true and the date must be non-empty. Signing an
    /// already signed record succeeds without touching it. Otherwise the
    /// record is replaced in one write, keeping its user id.
    pub fn sign_assignee(
        env: &Env,
        key: &String,
        is_signed: &String,
        signed_date: String,
        status: String,
    ) -> Result<(), Error> {
        Validator::require_non_empty(key)?;
        if !Validator::parse_bool(is_signed)? {
            return Err(Error::InconsistentSignature);
        }
        Validator::check_signature(true, &signed_date)?;

        let current: AssigneeRecord = Self::load(env, key)?;
        if current.is_signed {
            log!(env, "assignee already signed", key.clone());
            return Ok(());
        }

        let signed = AssigneeRecord {
            user_id: current.user_id,
            is_signed: true,
            signed_date: signed_date.clone(),
            status: status.clone(),
        };
        Self::store(env, key, &signed)?;

        env.events().publish(
            (Symbol::new(env, "assignee_signed"), key.clone()),
            AssigneeSignedEvent {
                user_id: signed.user_id,
                signed_date,
                status,
            },
        );

        Ok(())
    }

    pub fn read_contract(env: &Env, key: &String) -> Result<ContractRecord, Error> {
        Validator::require_non_empty(key)?;
        Self::load(env, key)
    }

    pub fn read_assignee(env: &Env, key: &String) -> Result<AssigneeRecord, Error> {
        Validator::require_non_empty(key)?;
        Self::load(env, key)
    }

    /// Whether the assignee under `key` has signed.
    ///
    /// A missing record reads as `false` rather than `NotFound`, so callers
    /// cannot tell "no such assignee" from "not signed yet". Corrupt entries
    /// still fail.
    pub fn read_assignee_signed_status(env: &Env, key: &String) -> Result<bool, Error> {
        Validator::require_non_empty(key)?;
        match Self::load::<AssigneeRecord>(env, key) {
            Ok(record) => Ok(record.is_signed),
            Err(Error::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Stored bytes under `key`. Record entries come back as their XDR.
    pub fn raw_get(env: &Env, key: &String) -> Result<Bytes, Error> {
        Validator::require_non_empty(key)?;
        let entry = Storage::get(env, key)?;
        match Bytes::try_from_val(env, &entry) {
            Ok(bytes) => Ok(bytes),
            Err(_) => Ok(entry.to_xdr(env)),
        }
    }

    pub fn raw_put(env: &Env, key: &String, value: Bytes) -> Result<(), Error> {
        Validator::require_non_empty(key)?;
        let size = value.len();
        let entry: Val = value.into_val(env);
        Storage::put(env, key, &entry)?;

        env.events().publish(
            (Symbol::new(env, "entry_written"), key.clone()),
            EntryWrittenEvent {
                key: key.clone(),
                size,
            },
        );

        Ok(())
    }

    /// Remove whatever is stored under `key`. Absent keys are not an error.
    pub fn raw_delete(env: &Env, key: &String) -> Result<(), Error> {
        Validator::require_non_empty(key)?;
        if !Storage::has(env, key) {
            return Ok(());
        }
        Storage::delete(env, key);

        env.events().publish(
            (Symbol::new(env, "entry_deleted"), key.clone()),
            EntryDeletedEvent { key: key.clone() },
        );

        Ok(())
    }

    fn load<T: Record>(env: &Env, key: &String) -> Result<T, Error> {
        let entry = Storage::get(env, key)?;
        T::decode(env, &entry).map_err(|err| {
            log!(env, "undecodable entry", key.clone());
            err
        })
    }

    fn store<T: Record>(env: &Env, key: &String, record: &T) -> Result<(), Error> {
        let entry: Val = record.encode(env).into_val(env);
        Storage::put(env, key, &entry)
    }
}
