use crate::codec::Record;
use crate::error::Error;
use crate::ledger::Ledger;
use crate::validation::Validator;
use soroban_sdk::{log, xdr::ToXdr, Bytes, Env, String, Symbol, Vec};

/// Entry point an operation is called through.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Surface {
    /// Accepts every operation
    Invoke,
    /// Accepts read-only operations
    Query,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    CreateContract,
    CreateAssignee,
    SignAssignee,
    ReadContract,
    ReadAssignee,
    ReadAssigneeSignedStatus,
    RawGet,
    RawPut,
    RawDelete,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::CreateContract,
        Operation::CreateAssignee,
        Operation::SignAssignee,
        Operation::ReadContract,
        Operation::ReadAssignee,
        Operation::ReadAssigneeSignedStatus,
        Operation::RawGet,
        Operation::RawPut,
        Operation::RawDelete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateContract => "createContract",
            Operation::CreateAssignee => "createAssignee",
            Operation::SignAssignee => "signAssignee",
            Operation::ReadContract => "readContract",
            Operation::ReadAssignee => "readAssignee",
            Operation::ReadAssigneeSignedStatus => "readAssigneeSignedStatus",
            Operation::RawGet => "rawGet",
            Operation::RawPut => "rawPut",
            Operation::RawDelete => "rawDelete",
        }
    }

    pub fn arity(self) -> u32 {
        match self {
            Operation::CreateContract => 7,
            Operation::CreateAssignee | Operation::SignAssignee => 4,
            Operation::RawPut => 2,
            Operation::ReadContract
            | Operation::ReadAssignee
            | Operation::ReadAssigneeSignedStatus
            | Operation::RawGet
            | Operation::RawDelete => 1,
        }
    }

    pub fn is_read_only(self) -> bool {
        matches!(
            self,
            Operation::ReadContract
                | Operation::ReadAssignee
                | Operation::ReadAssigneeSignedStatus
                | Operation::RawGet
        )
    }

    /// Look up `function` among the operations `surface` exposes.
    pub fn resolve(env: &Env, surface: Surface, function: &Symbol) -> Result<Operation, Error> {
        Self::ALL
            .iter()
            .copied()
            .filter(|op| surface == Surface::Invoke || op.is_read_only())
            .find(|op| Symbol::new(env, op.name()) == *function)
            .ok_or(Error::UnknownOperation)
    }
}

/// Run `function` with positional string arguments.
///
/// Mutations return empty bytes, record reads the record's XDR, the signed
/// status the ASCII text "true" or "false", raw reads the stored bytes.
pub fn dispatch(
    env: &Env,
    surface: Surface,
    function: &Symbol,
    args: &Vec<String>,
) -> Result<Bytes, Error> {
    let op = Operation::resolve(env, surface, function).map_err(|err| {
        log!(env, "unknown operation", function.clone());
        err
    })?;
    if args.len() != op.arity() {
        log!(env, "wrong argument count", function.clone(), args.len());
        return Err(Error::WrongArgumentCount);
    }

    let done = Bytes::new(env);
    match op {
        Operation::CreateContract => {
            Ledger::create_contract(
                env,
                arg(args, 0)?,
                arg(args, 1)?,
                arg(args, 2)?,
                arg(args, 3)?,
                &arg(args, 4)?,
                &arg(args, 5)?,
                arg(args, 6)?,
            )?;
            Ok(done)
        }
        Operation::CreateAssignee => {
            Ledger::create_assignee(
                env,
                &arg(args, 0)?,
                &arg(args, 1)?,
                arg(args, 2)?,
                arg(args, 3)?,
            )?;
            Ok(done)
        }
        Operation::SignAssignee => {
            Ledger::sign_assignee(
                env,
                &arg(args, 0)?,
                &arg(args, 1)?,
                arg(args, 2)?,
                arg(args, 3)?,
            )?;
            Ok(done)
        }
        Operation::ReadContract => {
            let record = Ledger::read_contract(env, &arg(args, 0)?)?;
            Ok(record.encode(env).to_xdr(env))
        }
        Operation::ReadAssignee => {
            let record = Ledger::read_assignee(env, &arg(args, 0)?)?;
            Ok(record.encode(env).to_xdr(env))
        }
        Operation::ReadAssigneeSignedStatus => {
            let signed = Ledger::read_assignee_signed_status(env, &arg(args, 0)?)?;
            let text: &[u8] = if signed { b"true" } else { b"false" };
            Ok(Bytes::from_slice(env, text))
        }
        Operation::RawGet => Ledger::raw_get(env, &arg(args, 0)?),
        Operation::RawPut => {
            let value = Validator::to_bytes(env, &arg(args, 1)?)?;
            Ledger::raw_put(env, &arg(args, 0)?, value)?;
            Ok(done)
        }
        Operation::RawDelete => {
            Ledger::raw_delete(env, &arg(args, 0)?)?;
            Ok(done)
        }
    }
}

fn arg(args: &Vec<String>, index: u32) -> Result<String, Error> {
    args.get(index).ok_or(Error::WrongArgumentCount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_table_is_consistent() {
        for (i, op) in Operation::ALL.iter().enumerate() {
            assert!(!op.name().is_empty());
            assert!(op.arity() >= 1);
            for other in &Operation::ALL[i + 1..] {
                assert_ne!(op.name(), other.name());
            }
        }
    }

    #[test]
    fn test_arity_matches_surface_table() {
        assert_eq!(Operation::CreateContract.arity(), 7);
        assert_eq!(Operation::CreateAssignee.arity(), 4);
        assert_eq!(Operation::SignAssignee.arity(), 4);
        assert_eq!(Operation::ReadContract.arity(), 1);
        assert_eq!(Operation::RawPut.arity(), 2);
    }

    #[test]
    fn test_resolve_by_name() {
        let env = Env::default();

        for op in Operation::ALL {
            let name = Symbol::new(&env, op.name());
            assert_eq!(Operation::resolve(&env, Surface::Invoke, &name), Ok(op));
        }

        let unknown = Symbol::new(&env, "addpartInformation");
        assert_eq!(
            Operation::resolve(&env, Surface::Invoke, &unknown),
            Err(Error::UnknownOperation)
        );
    }

    #[test]
    fn test_query_surface_is_read_only() {
        let env = Env::default();

        let read = Symbol::new(&env, "readAssignee");
        assert_eq!(
            Operation::resolve(&env, Surface::Query, &read),
            Ok(Operation::ReadAssignee)
        );

        for op in [
            Operation::CreateContract,
            Operation::CreateAssignee,
            Operation::SignAssignee,
            Operation::RawPut,
            Operation::RawDelete,
        ] {
            let name = Symbol::new(&env, op.name());
            assert_eq!(
                Operation::resolve(&env, Surface::Query, &name),
                Err(Error::UnknownOperation)
            );
        }
    }
}
