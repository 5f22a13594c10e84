use crate::error::Error;
use crate::types::{AssigneeRecord, ContractRecord};
use soroban_sdk::{Env, IntoVal, Map, Symbol, TryFromVal, Val};

// Wire field names. Kept stable so entries stay readable by other
// implementations of the ledger.
const CONTRACT_NUMBER: &str = "contractNumber";
const CONTRACT_DESCRIPTION: &str = "contractDescription";
const CONTRACT_OWNED_BY: &str = "contractOwnedby";
const FILE_HASH_KEY: &str = "filehashKey";
const NUMBER_OF_PARTS: &str = "numberofParts";
const CONTRACT_AMOUNT: &str = "contractAmount";
const CONTRACT_DUE_DATE: &str = "contractDuedate";

const USER_ID: &str = "userID";
const IS_SIGNED: &str = "isSigned";
const SIGNED_DATE: &str = "signedDate";
const STATUS: &str = "status";

/// A record that can be stored as a self-describing ledger entry.
///
/// Entries are host maps from field name to value. The host keeps map
/// keys ordered, so the XDR of an encoded record is deterministic.
pub trait Record: Sized {
    fn encode(&self, env: &Env) -> Map<Symbol, Val>;

    /// Fails with `CorruptData` unless `entry` is a map carrying every
    /// field with its declared type.
    fn decode(env: &Env, entry: &Val) -> Result<Self, Error>;
}

impl Record for ContractRecord {
    fn encode(&self, env: &Env) -> Map<Symbol, Val> {
        let mut fields = Map::new(env);
        put(env, &mut fields, CONTRACT_NUMBER, self.contract_number.clone());
        put(env, &mut fields, CONTRACT_DESCRIPTION, self.description.clone());
        put(env, &mut fields, CONTRACT_OWNED_BY, self.owned_by.clone());
        put(env, &mut fields, FILE_HASH_KEY, self.file_hash_key.clone());
        put(env, &mut fields, NUMBER_OF_PARTS, self.number_of_parts);
        put(env, &mut fields, CONTRACT_AMOUNT, self.amount);
        put(env, &mut fields, CONTRACT_DUE_DATE, self.due_date.clone());
        fields
    }

    fn decode(env: &Env, entry: &Val) -> Result<Self, Error> {
        let fields = fields_of(env, entry)?;
        Ok(ContractRecord {
            contract_number: field(env, &fields, CONTRACT_NUMBER)?,
            description: field(env, &fields, CONTRACT_DESCRIPTION)?,
            owned_by: field(env, &fields, CONTRACT_OWNED_BY)?,
            file_hash_key: field(env, &fields, FILE_HASH_KEY)?,
            number_of_parts: field(env, &fields, NUMBER_OF_PARTS)?,
            amount: field(env, &fields, CONTRACT_AMOUNT)?,
            due_date: field(env, &fields, CONTRACT_DUE_DATE)?,
        })
    }
}

impl Record for AssigneeRecord {
    fn encode(&self, env: &Env) -> Map<Symbol, Val> {
        let mut fields = Map::new(env);
        put(env, &mut fields, USER_ID, self.user_id);
        put(env, &mut fields, IS_SIGNED, self.is_signed);
        put(env, &mut fields, SIGNED_DATE, self.signed_date.clone());
        put(env, &mut fields, STATUS, self.status.clone());
        fields
    }

    fn decode(env: &Env, entry: &Val) -> Result<Self, Error> {
        let fields = fields_of(env, entry)?;
        Ok(AssigneeRecord {
            user_id: field(env, &fields, USER_ID)?,
            is_signed: field(env, &fields, IS_SIGNED)?,
            signed_date: field(env, &fields, SIGNED_DATE)?,
            status: field(env, &fields, STATUS)?,
        })
    }
}

fn put<T: IntoVal<Env, Val>>(env: &Env, fields: &mut Map<Symbol, Val>, name: &str, value: T) {
    fields.set(Symbol::new(env, name), value.into_val(env));
}

fn fields_of(env: &Env, entry: &Val) -> Result<Map<Symbol, Val>, Error> {
    Map::<Symbol, Val>::try_from_val(env, entry).map_err(|_| Error::CorruptData)
}

fn field<T: TryFromVal<Env, Val>>(
    env: &Env,
    fields: &Map<Symbol, Val>,
    name: &str,
) -> Result<T, Error> {
    let raw = fields.get(Symbol::new(env, name)).ok_or(Error::CorruptData)?;
    T::try_from_val(env, &raw).map_err(|_| Error::CorruptData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SCALE;
    use soroban_sdk::{xdr::ToXdr, Bytes, String};

    fn sample_contract(env: &Env) -> ContractRecord {
        ContractRecord {
            contract_number: String::from_str(env, "C-1001"),
            description: String::from_str(env, "Bracket assembly"),
            owned_by: String::from_str(env, "acme"),
            file_hash_key: String::from_str(env, "QmHash"),
            number_of_parts: 12,
            amount: 1500 * SCALE + SCALE / 4,
            due_date: String::from_str(env, "2024-06-30"),
        }
    }

    fn sample_assignee(env: &Env) -> AssigneeRecord {
        AssigneeRecord {
            user_id: 42,
            is_signed: true,
            signed_date: String::from_str(env, "2024-01-01"),
            status: String::from_str(env, "signed"),
        }
    }

    #[test]
    fn test_contract_round_trip() {
        let env = Env::default();
        let record = sample_contract(&env);

        let entry: Val = record.encode(&env).into_val(&env);
        assert_eq!(ContractRecord::decode(&env, &entry), Ok(record));
    }

    #[test]
    fn test_assignee_round_trip() {
        let env = Env::default();
        let record = sample_assignee(&env);

        let entry: Val = record.encode(&env).into_val(&env);
        assert_eq!(AssigneeRecord::decode(&env, &entry), Ok(record));
    }

    #[test]
    fn test_encoding_keeps_wire_field_names() {
        let env = Env::default();
        let fields = sample_assignee(&env).encode(&env);

        assert_eq!(fields.len(), 4);
        assert!(fields.contains_key(Symbol::new(&env, "userID")));
        assert!(fields.contains_key(Symbol::new(&env, "isSigned")));
        assert!(fields.contains_key(Symbol::new(&env, "signedDate")));
        assert!(fields.contains_key(Symbol::new(&env, "status")));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let env = Env::default();
        let first = sample_contract(&env).encode(&env).to_xdr(&env);
        let second = sample_contract(&env).encode(&env).to_xdr(&env);
        assert_eq!(first, second);
    }

    #[test]
    fn test_raw_bytes_are_corrupt() {
        let env = Env::default();
        let entry: Val = Bytes::from_slice(&env, b"not a record").into_val(&env);

        assert_eq!(ContractRecord::decode(&env, &entry), Err(Error::CorruptData));
        assert_eq!(AssigneeRecord::decode(&env, &entry), Err(Error::CorruptData));
    }

    #[test]
    fn test_missing_field_is_corrupt() {
        let env = Env::default();
        let entry: Val = sample_contract(&env).encode(&env).into_val(&env);

        // A contract entry lacks every assignee field
        assert_eq!(AssigneeRecord::decode(&env, &entry), Err(Error::CorruptData));
    }

    #[test]
    fn test_mistyped_field_is_corrupt() {
        let env = Env::default();
        let mut fields = sample_assignee(&env).encode(&env);
        // signedDate written as a number
        fields.set(Symbol::new(&env, "signedDate"), 20240101u64.into_val(&env));

        let entry: Val = fields.into_val(&env);
        assert_eq!(AssigneeRecord::decode(&env, &entry), Err(Error::CorruptData));
    }
}
