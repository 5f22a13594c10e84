#![no_std]

mod codec;
mod dispatch;
mod error;
mod events;
mod ledger;
mod storage;
mod types;
mod validation;

pub use codec::Record;
pub use dispatch::{Operation, Surface};
pub use error::{Error, ErrorKind};
pub use types::{AssigneeRecord, ContractRecord, LedgerConfig, SCALE};

use ledger::Ledger;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Bytes, Env, String, Symbol, Vec};

#[contract]
pub struct ContractLedger;

#[contractimpl]
impl ContractLedger {
    // ============================================
    // CONFIGURATION
    // ============================================

    /// Store the ledger config. Operations fall back to defaults until
    /// this is called.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Config already stored
    /// - `InvalidConfig`: TTL or size limits out of range
    pub fn init(env: Env, config: LedgerConfig) -> Result<(), Error> {
        if Storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }

        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn get_config(env: Env) -> LedgerConfig {
        Storage::get_config(&env)
    }

    // ============================================
    // HOST DISPATCH
    // ============================================

    /// Run any operation by name with positional string arguments.
    ///
    /// # Errors
    /// - `UnknownOperation`: No operation with this name
    /// - `WrongArgumentCount`: Argument count differs from the operation's arity
    /// - any error of the operation itself
    pub fn invoke(env: Env, function: Symbol, args: Vec<String>) -> Result<Bytes, Error> {
        dispatch::dispatch(&env, Surface::Invoke, &function, &args)
    }

    /// Like `invoke`, restricted to read-only operations.
    pub fn query(env: Env, function: Symbol, args: Vec<String>) -> Result<Bytes, Error> {
        dispatch::dispatch(&env, Surface::Query, &function, &args)
    }

    // ============================================
    // CONTRACTS
    // ============================================

    /// # Errors
    /// - `EmptyField`: Empty contract number
    /// - `InvalidNumber`: Amount or part count not a non-negative number
    #[allow(clippy::too_many_arguments)]
    pub fn create_contract(
        env: Env,
        contract_number: String,
        description: String,
        owned_by: String,
        file_hash_key: String,
        amount: String,
        number_of_parts: String,
        due_date: String,
    ) -> Result<(), Error> {
        Ledger::create_contract(
            &env,
            contract_number,
            description,
            owned_by,
            file_hash_key,
            &amount,
            &number_of_parts,
            due_date,
        )
    }

    pub fn read_contract(env: Env, key: String) -> Result<ContractRecord, Error> {
        Ledger::read_contract(&env, &key)
    }

    // ============================================
    // ASSIGNEES
    // ============================================

    /// # Errors
    /// - `InvalidNumber`: User id not a whole non-negative number
    /// - `InvalidBool`: Signed flag not a boolean
    /// - `InconsistentSignature`: Signed without a date, or unsigned with one
    pub fn create_assignee(
        env: Env,
        user_id: String,
        is_signed: String,
        signed_date: String,
        status: String,
    ) -> Result<(), Error> {
        Ledger::create_assignee(&env, &user_id, &is_signed, signed_date, status)
    }

    /// # Errors
    /// - `NotFound`: No assignee under `key`
    /// - `CorruptData`: Entry under `key` is not an assignee record
    /// - `InconsistentSignature`: Flag not true or date empty
    pub fn sign_assignee(
        env: Env,
        key: String,
        is_signed: String,
        signed_date: String,
        status: String,
    ) -> Result<(), Error> {
        Ledger::sign_assignee(&env, &key, &is_signed, signed_date, status)
    }

    pub fn read_assignee(env: Env, key: String) -> Result<AssigneeRecord, Error> {
        Ledger::read_assignee(&env, &key)
    }

    /// False for missing assignees as well as unsigned ones.
    pub fn read_assignee_signed_status(env: Env, key: String) -> Result<bool, Error> {
        Ledger::read_assignee_signed_status(&env, &key)
    }

    // ============================================
    // RAW ENTRIES
    // ============================================

    pub fn raw_get(env: Env, key: String) -> Result<Bytes, Error> {
        Ledger::raw_get(&env, &key)
    }

    pub fn raw_put(env: Env, key: String, value: Bytes) -> Result<(), Error> {
        Ledger::raw_put(&env, &key, value)
    }

    pub fn raw_delete(env: Env, key: String) -> Result<(), Error> {
        Ledger::raw_delete(&env, &key)
    }
}
